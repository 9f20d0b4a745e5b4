use super::core::StubResolver;
use async_trait::async_trait;
use ferrous_stub_application::ports::{CacheCleanupOutcome, CacheMaintenancePort, DnsResolver};
use ferrous_stub_domain::{DomainError, Message, RecordType};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// A [`StubResolver`] behind one async mutex.
///
/// Cache reads and writes and id issuance for every caller go through the
/// same lock, and a resolve holds it for its whole failover loop.
#[derive(Clone)]
pub struct SharedResolver {
    inner: Arc<Mutex<StubResolver>>,
}

impl SharedResolver {
    pub fn new(resolver: StubResolver) -> Self {
        Self {
            inner: Arc::new(Mutex::new(resolver)),
        }
    }

    /// Exclusive access, e.g. to add a server or switch to TCP.
    pub async fn lock(&self) -> MutexGuard<'_, StubResolver> {
        self.inner.lock().await
    }
}

#[async_trait]
impl DnsResolver for SharedResolver {
    async fn resolve_raw(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Arc<Message>, DomainError> {
        self.inner.lock().await.resolve_raw(domain, record_type).await
    }
}

#[async_trait]
impl CacheMaintenancePort for SharedResolver {
    async fn run_cleanup(&self) -> Result<CacheCleanupOutcome, DomainError> {
        let mut resolver = self.inner.lock().await;
        let entries_removed = resolver.cleanup();
        Ok(CacheCleanupOutcome {
            entries_removed,
            cache_size: resolver.cache().len(),
        })
    }
}
