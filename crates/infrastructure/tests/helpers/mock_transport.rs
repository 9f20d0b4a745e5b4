use async_trait::async_trait;
use ferrous_stub_domain::{DomainError, TransportMode};
use ferrous_stub_infrastructure::dns::transport::{DnsTransport, TransportResponse};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

type Handler = Arc<dyn Fn(&[u8]) -> Result<Vec<u8>, DomainError> + Send + Sync>;

#[derive(Debug, Clone)]
pub struct SentQuery {
    pub server: SocketAddr,
    pub bytes: Vec<u8>,
    pub timeout: Duration,
    pub mode: TransportMode,
}

/// Scripted transport: each server gets a handler that turns the query
/// bytes into a reply or an error. Unscripted servers fail with a
/// `TransportError`. Every call is recorded.
#[derive(Default)]
pub struct MockTransport {
    handlers: HashMap<SocketAddr, Handler>,
    calls: Mutex<Vec<SentQuery>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on<F>(mut self, server: SocketAddr, handler: F) -> Self
    where
        F: Fn(&[u8]) -> Result<Vec<u8>, DomainError> + Send + Sync + 'static,
    {
        self.handlers.insert(server, Arc::new(handler));
        self
    }

    /// Replies with whatever `reply` builds from the query id.
    pub fn answer<F>(self, server: SocketAddr, reply: F) -> Self
    where
        F: Fn(u16) -> Vec<u8> + Send + Sync + 'static,
    {
        self.on(server, move |query| Ok(reply(super::query_id(query))))
    }

    pub fn fail(self, server: SocketAddr, error: DomainError) -> Self {
        self.on(server, move |_| Err(error.clone()))
    }

    pub fn calls(&self) -> Vec<SentQuery> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl DnsTransport for MockTransport {
    async fn send(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
        timeout: Duration,
        mode: TransportMode,
    ) -> Result<TransportResponse, DomainError> {
        self.calls.lock().unwrap().push(SentQuery {
            server,
            bytes: message_bytes.to_vec(),
            timeout,
            mode,
        });

        let handler = self
            .handlers
            .get(&server)
            .ok_or_else(|| DomainError::TransportError {
                server: server.to_string(),
                reason: "no route to host".to_string(),
            })?;

        handler(message_bytes).map(|bytes| TransportResponse {
            bytes,
            protocol_used: mode,
        })
    }
}
