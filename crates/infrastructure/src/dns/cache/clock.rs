use std::time::{SystemTime, UNIX_EPOCH};

/// Source of wall-clock time in whole Unix seconds.
///
/// Record and message expiry are absolute timestamps, so everything that
/// compares against them reads the time through this trait.
pub trait Clock: Send + Sync {
    fn now_secs(&self) -> u64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now_secs(&self) -> u64 {
        unix_now_secs()
    }
}

pub fn unix_now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
