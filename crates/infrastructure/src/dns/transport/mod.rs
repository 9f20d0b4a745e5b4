//! Upstream transports.
//!
//! A transport moves one encoded query to one server and hands back the raw
//! reply. It never inspects the payload; correlation and decoding belong to
//! the resolver.

pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use ferrous_stub_domain::{DomainError, TransportMode};
use std::net::SocketAddr;
use std::time::Duration;

pub use tcp::TcpTransport;
pub use udp::UdpTransport;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: TransportMode,
}

#[async_trait]
pub trait DnsTransport: Send + Sync {
    /// Sends `message_bytes` to `server` and waits at most `timeout` for the
    /// reply. Fails with `ResponseTimeout` or `TransportError`.
    async fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        timeout: Duration,
        mode: TransportMode,
    ) -> Result<TransportResponse, DomainError>;
}

/// Real sockets: picks UDP or TCP per call from the requested mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct SocketTransport;

impl SocketTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DnsTransport for SocketTransport {
    async fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        timeout: Duration,
        mode: TransportMode,
    ) -> Result<TransportResponse, DomainError> {
        match mode {
            TransportMode::Udp => UdpTransport::new(server).exchange(message_bytes, timeout).await,
            TransportMode::Tcp => TcpTransport::new(server).exchange(message_bytes, timeout).await,
        }
    }
}

pub(crate) fn transport_error(server: SocketAddr, reason: impl Into<String>) -> DomainError {
    DomainError::TransportError {
        server: server.to_string(),
        reason: reason.into(),
    }
}

pub(crate) fn timeout_error(server: SocketAddr) -> DomainError {
    DomainError::ResponseTimeout {
        server: server.to_string(),
    }
}
