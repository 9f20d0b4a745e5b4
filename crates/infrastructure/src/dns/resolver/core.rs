use super::txid::TransactionIdCounter;
use crate::dns::cache::{Clock, DnsCache, SystemClock};
use crate::dns::forwarding::{MessageBuilder, ResponseParser};
use crate::dns::transport::{DnsTransport, SocketTransport};
use ferrous_stub_domain::config::parse_server_addr;
use ferrous_stub_domain::{
    DomainError, Message, NormalizedRecord, RecordType, ResolverConfig, TransportMode,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Caching stub resolver.
///
/// Servers are tried strictly in configured order, one at a time. The first
/// response whose id matches and whose RCODE is zero wins; anything else
/// moves on to the next server. When every server fails the last error is
/// returned.
///
/// The cache and the id counter are plain instance state behind `&mut self`.
/// Use [`SharedResolver`](super::SharedResolver) to share one instance.
pub struct StubResolver {
    config: ResolverConfig,
    servers: Vec<SocketAddr>,
    transport: Arc<dyn DnsTransport>,
    clock: Arc<dyn Clock>,
    cache: DnsCache,
    ids: TransactionIdCounter,
}

impl StubResolver {
    /// Fails if any configured server address does not parse. An empty
    /// server list is accepted; servers can be added later.
    pub fn new(config: ResolverConfig) -> Result<Self, DomainError> {
        let servers = config
            .servers
            .iter()
            .map(|s| parse_server_addr(s))
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            servers = servers.len(),
            timeout_ms = config.timeout_ms,
            transport = %config.transport,
            cache_enabled = config.cache_enabled,
            "Stub resolver created"
        );

        Ok(Self {
            config,
            servers,
            transport: Arc::new(SocketTransport::new()),
            clock: Arc::new(SystemClock),
            cache: DnsCache::new(),
            ids: TransactionIdCounter::random(),
        })
    }

    pub fn with_transport(mut self, transport: Arc<dyn DnsTransport>) -> Self {
        self.transport = transport;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_transaction_ids(mut self, ids: TransactionIdCounter) -> Self {
        self.ids = ids;
        self
    }

    pub fn add_server(&mut self, address: &str) -> Result<(), DomainError> {
        let addr = parse_server_addr(address)?;
        self.servers.push(addr);
        self.config.add_server(address);
        debug!(server = %addr, position = self.servers.len() - 1, "Server added");
        Ok(())
    }

    pub fn enable_tcp(&mut self) {
        self.config.enable_tcp();
    }

    /// Stops reading from and writing to the cache and drops what it holds.
    pub fn disable_cache(&mut self) {
        self.config.disable_cache();
        self.cache.clear();
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn servers(&self) -> &[SocketAddr] {
        &self.servers
    }

    pub fn transport_mode(&self) -> TransportMode {
        self.config.transport
    }

    pub fn cache(&self) -> &DnsCache {
        &self.cache
    }

    pub async fn resolve_raw(
        &mut self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Arc<Message>, DomainError> {
        if self.config.cache_enabled {
            if let Some(message) = self.cache.get(domain, record_type, self.clock.now_secs()) {
                debug!(domain = %domain, record_type = %record_type, "Cache hit");
                return Ok(message);
            }
        }

        if self.servers.is_empty() {
            return Err(DomainError::NoServersConfigured);
        }

        let mut last_error = DomainError::NoServersConfigured;

        let servers = self.servers.clone();
        for (position, server) in servers.into_iter().enumerate() {
            match self.query_server(server, domain, record_type).await {
                Ok(message) => {
                    debug!(
                        server = %server,
                        position,
                        answers = message.answers.len(),
                        ttl = message.header.ttl,
                        "Server responded"
                    );

                    let message = Arc::new(message);
                    if self.config.cache_enabled {
                        self.cache.insert(domain, record_type, Arc::clone(&message));
                    }
                    return Ok(message);
                }
                Err(e) => {
                    warn!(server = %server, error = %e, position, "Failing over");
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }

    pub async fn resolve(
        &mut self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<NormalizedRecord>, DomainError> {
        let message = self.resolve_raw(domain, record_type).await?;
        Ok(message.normalized())
    }

    /// Evicts every expired cache entry; returns how many were removed.
    pub fn cleanup(&mut self) -> usize {
        let removed = self.cache.evict_expired(self.clock.now_secs());
        if removed > 0 {
            info!(removed, remaining = self.cache.len(), "Cache cleanup");
        }
        removed
    }

    async fn query_server(
        &mut self,
        server: SocketAddr,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Message, DomainError> {
        let id = self.ids.next();
        let query = MessageBuilder::build_query(id, domain, record_type)?;

        debug!(
            server = %server,
            id,
            domain = %domain,
            record_type = %record_type,
            transport = %self.config.transport,
            "Sending query"
        );

        let response = self
            .transport
            .send(server, &query, self.config.timeout(), self.config.transport)
            .await?;

        let message = ResponseParser::parse_at(&response.bytes, self.clock.now_secs())?;

        if message.header.id != id {
            return Err(DomainError::TransactionIdMismatch {
                expected: id,
                received: message.header.id,
            });
        }

        if !message.header.rcode.is_success() {
            return Err(DomainError::ServerError(message.header.rcode));
        }

        Ok(message)
    }
}
