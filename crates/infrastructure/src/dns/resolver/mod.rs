pub mod core;
pub mod shared;
pub mod txid;

pub use self::core::StubResolver;
pub use shared::SharedResolver;
pub use txid::TransactionIdCounter;
