//! Ferrous Stub Domain Layer
pub mod config;
pub mod dns_message;
pub mod dns_record;
pub mod errors;

pub use config::{CliOverrides, Config, ConfigError, ResolverConfig, TransportMode};
pub use dns_message::{Header, Message, ResponseCode};
pub use dns_record::{
    DnsClass, MxData, NormalizedRecord, Question, RecordData, RecordType, ResourceRecord, SoaData,
};
pub use errors::DomainError;
