use ferrous_stub_domain::DomainError;
use thiserror::Error;

/// Faults raised while walking a wire-format buffer.
///
/// Only `RecursionTooDeep` survives the parse boundary with its identity;
/// everything else becomes a generic `MalformedResponse`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireError {
    #[error("read of {len} bytes at offset {pos} exceeds buffer of {size} bytes")]
    OutOfRange { pos: usize, len: usize, size: usize },

    #[error("record data length {actual} does not match expected {expected}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("record data overruns its declared length")]
    RdataOverrun,

    #[error("compression pointer chain too deep")]
    RecursionTooDeep,
}

impl From<WireError> for DomainError {
    fn from(e: WireError) -> Self {
        match e {
            WireError::RecursionTooDeep => DomainError::RecursionTooDeep,
            _ => DomainError::MalformedResponse("failed to decode response records".to_string()),
        }
    }
}
