use crate::errors::DomainError;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Record types understood by the resolver.
///
/// Anything else seen on the wire is kept as `Unknown(code)` and rendered as
/// `UNKNOWN(code)`. Unknown types can be decoded but never queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    NS,
    CNAME,
    SOA,
    PTR,
    MX,
    TXT,
    AAAA,
    Unknown(u16),
}

impl RecordType {
    pub const SUPPORTED: [RecordType; 8] = [
        RecordType::A,
        RecordType::NS,
        RecordType::CNAME,
        RecordType::SOA,
        RecordType::PTR,
        RecordType::MX,
        RecordType::TXT,
        RecordType::AAAA,
    ];

    pub fn mnemonic(&self) -> Cow<'static, str> {
        match self {
            RecordType::A => Cow::Borrowed("A"),
            RecordType::NS => Cow::Borrowed("NS"),
            RecordType::CNAME => Cow::Borrowed("CNAME"),
            RecordType::SOA => Cow::Borrowed("SOA"),
            RecordType::PTR => Cow::Borrowed("PTR"),
            RecordType::MX => Cow::Borrowed("MX"),
            RecordType::TXT => Cow::Borrowed("TXT"),
            RecordType::AAAA => Cow::Borrowed("AAAA"),
            RecordType::Unknown(code) => Cow::Owned(format!("UNKNOWN({})", code)),
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::SOA => 6,
            RecordType::PTR => 12,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::AAAA => 28,
            RecordType::Unknown(code) => *code,
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => RecordType::A,
            2 => RecordType::NS,
            5 => RecordType::CNAME,
            6 => RecordType::SOA,
            12 => RecordType::PTR,
            15 => RecordType::MX,
            16 => RecordType::TXT,
            28 => RecordType::AAAA,
            other => RecordType::Unknown(other),
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, RecordType::Unknown(_))
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.mnemonic())
    }
}

impl FromStr for RecordType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "NS" => Ok(RecordType::NS),
            "CNAME" => Ok(RecordType::CNAME),
            "SOA" => Ok(RecordType::SOA),
            "PTR" => Ok(RecordType::PTR),
            "MX" => Ok(RecordType::MX),
            "TXT" => Ok(RecordType::TXT),
            "AAAA" => Ok(RecordType::AAAA),
            _ => Err(DomainError::UnsupportedRecordType(s.to_string())),
        }
    }
}

/// Record classes. Queries are always sent in `IN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DnsClass {
    IN,
    CS,
    CH,
    HS,
    Unknown(u16),
}

impl DnsClass {
    pub fn mnemonic(&self) -> Cow<'static, str> {
        match self {
            DnsClass::IN => Cow::Borrowed("IN"),
            DnsClass::CS => Cow::Borrowed("CS"),
            DnsClass::CH => Cow::Borrowed("CH"),
            DnsClass::HS => Cow::Borrowed("HS"),
            DnsClass::Unknown(code) => Cow::Owned(format!("UNKNOWN({})", code)),
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            DnsClass::IN => 1,
            DnsClass::CS => 2,
            DnsClass::CH => 3,
            DnsClass::HS => 4,
            DnsClass::Unknown(code) => *code,
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => DnsClass::IN,
            2 => DnsClass::CS,
            3 => DnsClass::CH,
            4 => DnsClass::HS,
            other => DnsClass::Unknown(other),
        }
    }
}

impl fmt::Display for DnsClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.mnemonic())
    }
}
