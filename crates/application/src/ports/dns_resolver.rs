use async_trait::async_trait;
use ferrous_stub_domain::{DomainError, Message, NormalizedRecord, RecordType};
use std::sync::Arc;

#[async_trait]
pub trait DnsResolver: Send + Sync {
    /// Full decoded response, from cache or from the first server that answers.
    async fn resolve_raw(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Arc<Message>, DomainError>;

    /// Every record section flattened and sorted.
    async fn resolve(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<NormalizedRecord>, DomainError> {
        let message = self.resolve_raw(domain, record_type).await?;
        Ok(message.normalized())
    }
}
