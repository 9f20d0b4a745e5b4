use super::{DnsClass, RecordData, ResourceRecord, RecordType};
use std::cmp::Ordering;

/// Flat view of one record as returned by `resolve`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    pub name: String,
    pub record_type: RecordType,
    pub class: DnsClass,
    pub content: String,
    /// Only set for MX records.
    pub priority: Option<u16>,
}

impl NormalizedRecord {
    pub fn from_record(record: &ResourceRecord) -> Self {
        let (content, priority) = match &record.data {
            RecordData::Text(text) => (text.clone(), None),
            RecordData::Mx(mx) => (mx.exchange.clone(), Some(mx.priority)),
            RecordData::Soa(soa) => (soa.to_string(), None),
            RecordData::Empty => (String::new(), None),
        };

        Self {
            name: record.name.clone(),
            record_type: record.record_type,
            class: record.class,
            content,
            priority,
        }
    }

    /// Name, then type mnemonic, then priority when both sides carry one.
    pub fn sort_order(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| {
                self.record_type
                    .mnemonic()
                    .cmp(&other.record_type.mnemonic())
            })
            .then_with(|| match (self.priority, other.priority) {
                (Some(a), Some(b)) => a.cmp(&b),
                _ => Ordering::Equal,
            })
    }
}
