//! Per-type rdata decoders.
//!
//! Every decoder sees the whole message (names inside rdata may point
//! anywhere earlier in it) plus the rdata window `[start, start + len)`.
//! Reading past the window is a structural fault.

use crate::dns::wire::{decode_name, WireCursor, WireError, DEFAULT_POINTER_BUDGET};
use ferrous_stub_domain::{MxData, RecordData, RecordType, SoaData};
use std::net::Ipv4Addr;

pub fn decode_rdata(
    buf: &[u8],
    record_type: RecordType,
    start: usize,
    len: usize,
) -> Result<RecordData, WireError> {
    let window = RdataWindow { buf, start, end: start + len };

    match record_type {
        RecordType::A => window.ipv4().map(RecordData::Text),
        RecordType::AAAA => window.ipv6().map(RecordData::Text),
        RecordType::NS | RecordType::CNAME | RecordType::PTR => {
            window.name_at(start).map(|(name, _)| RecordData::Text(name))
        }
        RecordType::TXT => window.character_strings().map(RecordData::Text),
        RecordType::SOA => window.soa().map(RecordData::Soa),
        RecordType::MX => window.mx().map(RecordData::Mx),
        RecordType::Unknown(_) => Ok(RecordData::Empty),
    }
}

struct RdataWindow<'a> {
    buf: &'a [u8],
    start: usize,
    end: usize,
}

impl<'a> RdataWindow<'a> {
    fn len(&self) -> usize {
        self.end - self.start
    }

    fn expect_len(&self, expected: usize) -> Result<(), WireError> {
        if self.len() != expected {
            return Err(WireError::InvalidLength {
                expected,
                actual: self.len(),
            });
        }
        Ok(())
    }

    fn cursor(&self, pos: usize) -> WireCursor<'a> {
        WireCursor::new(self.buf).at(pos)
    }

    fn check_within(&self, pos: usize) -> Result<(), WireError> {
        if pos > self.end {
            return Err(WireError::RdataOverrun);
        }
        Ok(())
    }

    fn name_at(&self, pos: usize) -> Result<(String, usize), WireError> {
        let (name, next) = decode_name(self.buf, pos, DEFAULT_POINTER_BUDGET)?;
        self.check_within(next)?;
        Ok((name, next))
    }

    fn ipv4(&self) -> Result<String, WireError> {
        self.expect_len(4)?;
        let octets = self.cursor(self.start).read_bytes(4)?;
        Ok(Ipv4Addr::new(octets[0], octets[1], octets[2], octets[3]).to_string())
    }

    fn ipv6(&self) -> Result<String, WireError> {
        self.expect_len(16)?;
        let mut cursor = self.cursor(self.start);
        let mut groups = [0u16; 8];
        for group in groups.iter_mut() {
            *group = cursor.read_u16()?;
        }
        Ok(format_ipv6(&groups))
    }

    fn character_strings(&self) -> Result<String, WireError> {
        let mut cursor = self.cursor(self.start);
        let mut text = Vec::with_capacity(self.len());
        while cursor.position() < self.end {
            let len = cursor.read_u8()? as usize;
            self.check_within(cursor.position() + len)?;
            text.extend_from_slice(cursor.read_bytes(len)?);
        }
        Ok(String::from_utf8_lossy(&text).into_owned())
    }

    fn soa(&self) -> Result<SoaData, WireError> {
        let (mname, next) = self.name_at(self.start)?;
        let (rname, next) = self.name_at(next)?;
        self.check_within(next + 20)?;

        let mut cursor = self.cursor(next);
        Ok(SoaData {
            mname,
            rname,
            serial: cursor.read_u32()?,
            refresh: cursor.read_u32()?,
            retry: cursor.read_u32()?,
            expire: cursor.read_u32()?,
            minimum: cursor.read_u32()?,
        })
    }

    fn mx(&self) -> Result<MxData, WireError> {
        self.check_within(self.start + 2)?;
        let priority = self.cursor(self.start).read_u16()?;
        let (exchange, _) = self.name_at(self.start + 2)?;
        Ok(MxData { priority, exchange })
    }
}

/// Lowercase hex groups with the longest run of zero groups collapsed once
/// to `::`. A single zero group counts as a run; ties go to the first run.
pub fn format_ipv6(groups: &[u16; 8]) -> String {
    let mut best: Option<(usize, usize)> = None;
    let mut run_start: Option<usize> = None;

    for i in 0..=groups.len() {
        let is_zero = i < groups.len() && groups[i] == 0;
        match (is_zero, run_start) {
            (true, None) => run_start = Some(i),
            (false, Some(start)) => {
                let len = i - start;
                if best.map_or(true, |(_, best_len)| len > best_len) {
                    best = Some((start, len));
                }
                run_start = None;
            }
            _ => {}
        }
    }

    let join = |part: &[u16]| {
        part.iter()
            .map(|g| format!("{:x}", g))
            .collect::<Vec<_>>()
            .join(":")
    };

    match best {
        Some((start, len)) => format!(
            "{}::{}",
            join(&groups[..start]),
            join(&groups[start + len..])
        ),
        None => join(&groups[..]),
    }
}
