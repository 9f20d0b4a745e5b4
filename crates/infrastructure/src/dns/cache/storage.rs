use super::key::CacheKey;
use ferrous_stub_domain::{Message, RecordType};
use rustc_hash::FxBuildHasher;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Decoded responses keyed by `(domain, type)`.
///
/// Entries expire at the message's own absolute expiry. Expired entries are
/// invisible to `get` but stay resident until `evict_expired` runs.
#[derive(Debug, Default)]
pub struct DnsCache {
    entries: HashMap<CacheKey, Arc<Message>, FxBuildHasher>,
}

impl DnsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached message if it has not expired at `now_secs`.
    pub fn get(&self, domain: &str, record_type: RecordType, now_secs: u64) -> Option<Arc<Message>> {
        let key = CacheKey::new(domain, record_type);
        self.entries
            .get(&key)
            .filter(|message| !message.is_expired_at(now_secs))
            .cloned()
    }

    /// Stores `message`, replacing any previous entry for the same key.
    pub fn insert(&mut self, domain: &str, record_type: RecordType, message: Arc<Message>) {
        let key = CacheKey::new(domain, record_type);
        debug!(
            key = %key,
            expires_at = message.header.expires_at_secs,
            "Caching DNS response"
        );
        self.entries.insert(key, message);
    }

    /// Drops every entry already expired at `now_secs` and returns how many
    /// were removed.
    pub fn evict_expired(&mut self, now_secs: u64) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|_, message| !message.is_expired_at(now_secs));
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
