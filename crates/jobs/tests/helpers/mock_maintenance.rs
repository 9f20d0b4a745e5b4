use async_trait::async_trait;
use ferrous_stub_application::ports::{CacheCleanupOutcome, CacheMaintenancePort};
use ferrous_stub_domain::DomainError;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

pub struct MockCacheMaintenancePort {
    cleanup_call_count: Arc<AtomicU64>,
    should_fail: Arc<AtomicBool>,
    outcome: CacheCleanupOutcome,
}

impl MockCacheMaintenancePort {
    pub fn new() -> Self {
        Self {
            cleanup_call_count: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(AtomicBool::new(false)),
            outcome: CacheCleanupOutcome::default(),
        }
    }

    pub fn with_outcome(mut self, outcome: CacheCleanupOutcome) -> Self {
        self.outcome = outcome;
        self
    }

    pub fn cleanup_call_count(&self) -> u64 {
        self.cleanup_call_count.load(Ordering::Relaxed)
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::Relaxed);
    }
}

#[async_trait]
impl CacheMaintenancePort for MockCacheMaintenancePort {
    async fn run_cleanup(&self) -> Result<CacheCleanupOutcome, DomainError> {
        self.cleanup_call_count.fetch_add(1, Ordering::Relaxed);
        if self.should_fail.load(Ordering::Relaxed) {
            return Err(DomainError::TransportError {
                server: "mock".to_string(),
                reason: "mock cleanup failure".to_string(),
            });
        }
        Ok(self.outcome.clone())
    }
}
