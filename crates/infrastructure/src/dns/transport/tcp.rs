//! TCP Transport for DNS queries (RFC 1035 §4.2.2)
//!
//! Every message is framed with a two-byte big-endian length. A fresh
//! connection is opened per query and dropped afterwards.

use super::{timeout_error, transport_error, TransportResponse};
use ferrous_stub_domain::{DomainError, TransportMode};
use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    /// Connect, send and read back within a single `timeout`.
    pub async fn exchange(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let server = self.server_addr;

        let round_trip = async {
            let mut stream = TcpStream::connect(server)
                .await
                .map_err(|e| transport_error(server, format!("failed to connect: {}", e)))?;

            stream
                .set_nodelay(true)
                .map_err(|e| transport_error(server, format!("failed to set TCP_NODELAY: {}", e)))?;

            send_with_length_prefix(&mut stream, message_bytes)
                .await
                .map_err(|e| transport_error(server, format!("failed to send TCP query: {}", e)))?;

            debug!(server = %server, message_len = message_bytes.len(), "TCP query sent");

            read_with_length_prefix(&mut stream).await.map_err(|e| {
                transport_error(server, format!("failed to read TCP response: {}", e))
            })
        };

        let bytes = tokio::time::timeout(timeout, round_trip)
            .await
            .map_err(|_| timeout_error(server))??;

        debug!(server = %server, response_len = bytes.len(), "TCP response received");

        Ok(TransportResponse {
            bytes,
            protocol_used: TransportMode::Tcp,
        })
    }
}

pub(crate) async fn send_with_length_prefix<S>(stream: &mut S, message_bytes: &[u8]) -> io::Result<()>
where
    S: AsyncWriteExt + Unpin,
{
    let length = u16::try_from(message_bytes.len()).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("message of {} bytes does not fit a TCP frame", message_bytes.len()),
        )
    })?;

    stream.write_all(&length.to_be_bytes()).await?;
    stream.write_all(message_bytes).await?;
    stream.flush().await
}

/// Reads exactly one length-prefixed message. A short read is an error.
pub(crate) async fn read_with_length_prefix<S>(stream: &mut S) -> io::Result<Vec<u8>>
where
    S: AsyncReadExt + Unpin,
{
    let mut len_buf = [0u8; 2];
    stream.read_exact(&mut len_buf).await?;

    let mut response = vec![0u8; u16::from_be_bytes(len_buf) as usize];
    stream.read_exact(&mut response).await?;

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_length_prefix_framing() {
        let mut wire = Vec::new();
        send_with_length_prefix(&mut wire, b"\x12\x34\x01").await.unwrap();
        assert_eq!(wire, vec![0x00, 0x03, 0x12, 0x34, 0x01]);

        let mut reader = wire.as_slice();
        let message = read_with_length_prefix(&mut reader).await.unwrap();
        assert_eq!(message, vec![0x12, 0x34, 0x01]);
    }

    #[tokio::test]
    async fn test_short_body_is_an_error() {
        let mut reader: &[u8] = &[0x00, 0x05, 0xAA, 0xBB];
        let err = read_with_length_prefix(&mut reader).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[tokio::test]
    async fn test_missing_length_is_an_error() {
        let mut reader: &[u8] = &[0x00];
        assert!(read_with_length_prefix(&mut reader).await.is_err());
    }
}
