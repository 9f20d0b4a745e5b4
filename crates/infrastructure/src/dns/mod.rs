pub mod cache;
pub mod forwarding;
pub mod resolver;
pub mod transport;
pub mod wire;

pub use cache::{CacheKey, Clock, DnsCache, SystemClock};
pub use forwarding::{MessageBuilder, ResponseParser};
pub use resolver::{SharedResolver, StubResolver, TransactionIdCounter};
pub use transport::{DnsTransport, SocketTransport, TransportResponse};
