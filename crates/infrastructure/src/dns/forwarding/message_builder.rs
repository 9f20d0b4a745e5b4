//! DNS Message Builder
//!
//! Constructs DNS query messages in wire format: a 12-byte header followed by
//! a single question in class IN.

use crate::dns::wire::put_name;
use bytes::BufMut;
use ferrous_stub_domain::{DnsClass, DomainError, RecordType};

pub const HEADER_LEN: usize = 12;

/// First flag byte of every query: only RD (recursion desired) is set.
const FLAGS_RD: u8 = 0x01;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a DNS query message and serialize to wire format bytes
    ///
    /// Creates a standard recursive query with:
    /// - the caller's transaction id
    /// - RD (Recursion Desired) flag set
    /// - Single question section
    pub fn build_query(
        id: u16,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<u8>, DomainError> {
        if !record_type.is_supported() {
            return Err(DomainError::UnsupportedRecordType(record_type.to_string()));
        }

        let mut buf = Vec::with_capacity(HEADER_LEN + domain.len() + 6);

        buf.put_u16(id);
        buf.put_u8(FLAGS_RD);
        buf.put_u8(0);
        buf.put_u16(1);
        buf.put_u16(0);
        buf.put_u16(0);
        buf.put_u16(0);

        put_name(&mut buf, domain)?;

        buf.put_u16(record_type.to_u16());
        buf.put_u16(DnsClass::IN.to_u16());

        Ok(buf)
    }
}
