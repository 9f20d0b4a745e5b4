use crate::dns_record::{NormalizedRecord, Question, ResourceRecord};
use std::fmt;

/// Response code carried in the low seven bits of the second flag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResponseCode(pub u8);

impl ResponseCode {
    pub const NO_ERROR: ResponseCode = ResponseCode(0);

    pub fn is_success(&self) -> bool {
        self.0 == 0
    }

    pub fn name(&self) -> &'static str {
        match self.0 {
            0 => "NOERROR",
            1 => "FORMERR",
            2 => "SERVFAIL",
            3 => "NXDOMAIN",
            4 => "NOTIMP",
            5 => "REFUSED",
            _ => "UNKNOWN",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub id: u16,
    /// QR bit; set on responses.
    pub is_response: bool,
    pub opcode: u8,
    pub authoritative: bool,
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    pub rcode: ResponseCode,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
    /// Minimum record TTL, floored. Only meaningful on decoded responses.
    pub ttl: u32,
    /// Absolute expiry as a Unix timestamp (seconds).
    pub expires_at_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl Message {
    pub fn is_expired_at(&self, now_secs: u64) -> bool {
        now_secs >= self.header.expires_at_secs
    }

    /// Answers, authorities and additionals, in that order.
    pub fn records(&self) -> impl Iterator<Item = &ResourceRecord> {
        self.answers
            .iter()
            .chain(self.authorities.iter())
            .chain(self.additionals.iter())
    }

    /// Flattens every record section and sorts the result by name, type
    /// and MX priority. Ties keep their section order.
    pub fn normalized(&self) -> Vec<NormalizedRecord> {
        let mut records: Vec<NormalizedRecord> =
            self.records().map(NormalizedRecord::from_record).collect();
        records.sort_by(NormalizedRecord::sort_order);
        records
    }
}
