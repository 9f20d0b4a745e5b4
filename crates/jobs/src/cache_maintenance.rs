use ferrous_stub_application::ports::CacheMaintenancePort;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

const DEFAULT_CLEANUP_INTERVAL_SECS: u64 = 60;

/// Periodically sweeps expired entries out of the resolver cache.
pub struct CacheMaintenanceJob {
    maintenance: Arc<dyn CacheMaintenancePort>,
    cleanup_interval: Duration,
    shutdown: CancellationToken,
}

impl CacheMaintenanceJob {
    pub fn new(maintenance: Arc<dyn CacheMaintenancePort>) -> Self {
        Self {
            maintenance,
            cleanup_interval: Duration::from_secs(DEFAULT_CLEANUP_INTERVAL_SECS),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.cleanup_interval = interval;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn cleanup_interval(&self) -> Duration {
        self.cleanup_interval
    }

    /// Spawns the sweep loop. The first sweep runs immediately; the task
    /// ends once the cancellation token fires.
    pub fn start(self: Arc<Self>) -> JoinHandle<()> {
        info!(
            interval_ms = self.cleanup_interval.as_millis() as u64,
            "Starting cache maintenance job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.cleanup_interval);
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("CacheMaintenanceJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.maintenance.run_cleanup().await {
                            Ok(outcome) if outcome.entries_removed > 0 => {
                                info!(
                                    entries_removed = outcome.entries_removed,
                                    cache_size = outcome.cache_size,
                                    "Cache cleanup completed"
                                );
                            }
                            Ok(outcome) => {
                                debug!(cache_size = outcome.cache_size, "Cache cleanup found nothing to evict");
                            }
                            Err(e) => {
                                error!(error = %e, "Cache cleanup failed");
                            }
                        }
                    }
                }
            }
        })
    }
}
