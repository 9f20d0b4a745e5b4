use super::{DnsClass, RecordType};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoaData {
    pub mname: String,
    pub rname: String,
    pub serial: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub minimum: u32,
}

impl fmt::Display for SoaData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.mname,
            self.rname,
            self.serial,
            self.refresh,
            self.retry,
            self.expire,
            self.minimum
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MxData {
    pub priority: u16,
    pub exchange: String,
}

/// Decoded payload of a resource record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    /// A, AAAA, NS, CNAME, PTR and TXT all decode to a single string.
    Text(String),
    Soa(SoaData),
    Mx(MxData),
    /// Unrecognized type; only the raw rdata is available.
    Empty,
}

impl RecordData {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RecordData::Text(s) => Some(s),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub qtype: RecordType,
    pub qclass: DnsClass,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,

    pub record_type: RecordType,

    pub class: DnsClass,

    pub ttl: u32,

    /// Absolute expiry as a Unix timestamp (seconds).
    pub expires_at_secs: u64,

    pub data: RecordData,

    /// Raw rdata exactly as received, kept for every type.
    pub rdata: Vec<u8>,
}

impl ResourceRecord {
    pub fn is_expired_at(&self, now_secs: u64) -> bool {
        now_secs >= self.expires_at_secs
    }

    pub fn remaining_ttl(&self, now_secs: u64) -> u32 {
        self.expires_at_secs.saturating_sub(now_secs).min(u32::MAX as u64) as u32
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {} ", self.name, self.ttl, self.class, self.record_type)?;
        match &self.data {
            RecordData::Text(text) => write!(f, "{}", text),
            RecordData::Soa(soa) => write!(f, "{}", soa),
            RecordData::Mx(mx) => write!(f, "{} {}", mx.priority, mx.exchange),
            RecordData::Empty => write!(f, "\\# {}", self.rdata.len()),
        }
    }
}
