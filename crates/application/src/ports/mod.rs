mod cache_maintenance_port;
mod dns_resolver;

pub use cache_maintenance_port::{CacheCleanupOutcome, CacheMaintenancePort};
pub use dns_resolver::DnsResolver;
