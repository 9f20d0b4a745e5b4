use async_trait::async_trait;
use ferrous_stub_domain::DomainError;

/// Outcome of a cache cleanup sweep.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CacheCleanupOutcome {
    pub entries_removed: usize,
    pub cache_size: usize,
}

/// Port for periodic cache maintenance. The resolver never sweeps on its own.
#[async_trait]
pub trait CacheMaintenancePort: Send + Sync {
    /// Remove every expired entry.
    async fn run_cleanup(&self) -> Result<CacheCleanupOutcome, DomainError>;
}
