//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! One datagram out, one datagram back. Replies are read into a 512-byte
//! buffer since queries never advertise EDNS(0); anything longer arrives
//! truncated and is decoded as-is.

use super::{timeout_error, transport_error, TransportResponse};
use ferrous_stub_domain::{DomainError, TransportMode};
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Classic DNS datagram limit without EDNS(0)
pub const MAX_UDP_RESPONSE_SIZE: usize = 512;

pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    fn bind_addr(&self) -> SocketAddr {
        if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        }
    }

    pub async fn exchange(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let server = self.server_addr;

        let socket = UdpSocket::bind(self.bind_addr())
            .await
            .map_err(|e| transport_error(server, format!("failed to bind UDP socket: {}", e)))?;

        let round_trip = async {
            let bytes_sent = socket
                .send_to(message_bytes, server)
                .await
                .map_err(|e| transport_error(server, format!("failed to send UDP query: {}", e)))?;

            debug!(server = %server, bytes_sent, "UDP query sent");

            let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
            let (bytes_received, from_addr) = socket.recv_from(&mut recv_buf).await.map_err(|e| {
                transport_error(server, format!("failed to receive UDP response: {}", e))
            })?;

            if from_addr.ip() != server.ip() {
                warn!(
                    expected = %server,
                    received_from = %from_addr,
                    "UDP response from unexpected source"
                );
            }

            recv_buf.truncate(bytes_received);
            Ok::<_, DomainError>(recv_buf)
        };

        let bytes = tokio::time::timeout(timeout, round_trip)
            .await
            .map_err(|_| timeout_error(server))??;

        debug!(server = %server, bytes_received = bytes.len(), "UDP response received");

        Ok(TransportResponse {
            bytes,
            protocol_used: TransportMode::Udp,
        })
    }
}
