use crate::dns_message::ResponseCode;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unsupported record type: {0}")]
    UnsupportedRecordType(String),

    #[error("Label exceeds 63 bytes in domain name: {0}")]
    LabelTooLong(String),

    #[error("Transport error talking to {server}: {reason}")]
    TransportError { server: String, reason: String },

    #[error("Timeout waiting for response from {server}")]
    ResponseTimeout { server: String },

    #[error("Malformed DNS response: {0}")]
    MalformedResponse(String),

    #[error("Compression pointer chain too deep")]
    RecursionTooDeep,

    #[error("Transaction id mismatch: sent {expected}, received {received}")]
    TransactionIdMismatch { expected: u16, received: u16 },

    #[error("Server returned error: {0}")]
    ServerError(ResponseCode),

    #[error("Invalid server address: {0}")]
    InvalidServerAddress(String),

    #[error("No nameservers configured")]
    NoServersConfigured,
}

impl DomainError {
    /// Errors raised before any byte reaches the network.
    pub fn is_query_error(&self) -> bool {
        matches!(
            self,
            DomainError::UnsupportedRecordType(_) | DomainError::LabelTooLong(_)
        )
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DomainError::TransportError { .. } | DomainError::ResponseTimeout { .. }
        )
    }
}
