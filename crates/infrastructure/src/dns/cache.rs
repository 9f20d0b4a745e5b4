pub mod clock;
pub mod key;
pub mod storage;

pub use clock::{unix_now_secs, Clock, SystemClock};
pub use key::CacheKey;
pub use storage::DnsCache;
