#![allow(dead_code)]
mod mock_maintenance;

pub use mock_maintenance::MockCacheMaintenancePort;
