//! Domain name wire encoding (RFC 1035 §3.1, §4.1.4).
//!
//! Names are written uncompressed. On the read side compression pointers are
//! followed, each one spending a unit of an explicit budget so that cyclic or
//! very long chains in a hostile message terminate.

use super::cursor::WireCursor;
use super::error::WireError;
use bytes::BufMut;
use ferrous_stub_domain::DomainError;

pub const MAX_LABEL_LEN: usize = 63;

/// Pointer dereferences allowed while decoding a single name.
pub const DEFAULT_POINTER_BUDGET: u8 = 5;

const POINTER_MASK: u8 = 0xC0;

/// Writes `domain` as length-prefixed labels followed by the root label.
pub fn put_name<B: BufMut>(buf: &mut B, domain: &str) -> Result<(), DomainError> {
    for label in domain.split('.').filter(|label| !label.is_empty()) {
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::LabelTooLong(domain.to_string()));
        }
        buf.put_u8(label.len() as u8);
        buf.put_slice(label.as_bytes());
    }
    buf.put_u8(0);
    Ok(())
}

pub fn encode_name(domain: &str) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(domain.len() + 2);
    put_name(&mut buf, domain)?;
    Ok(buf)
}

/// Decodes the name starting at `start`.
///
/// Returns the dotted name (no trailing dot) and the offset just past the
/// name in the original position: after the root label, or after the first
/// two-byte pointer if one was followed.
pub fn decode_name(buf: &[u8], start: usize, budget: u8) -> Result<(String, usize), WireError> {
    let cursor = WireCursor::new(buf);
    let mut name = String::new();
    let mut pos = start;
    let mut budget = budget;
    let mut resume_at: Option<usize> = None;

    loop {
        let len = cursor.peek_u8_at(pos)?;

        if len == 0 {
            pos += 1;
            break;
        }

        if len >= POINTER_MASK {
            let low = cursor.peek_u8_at(pos + 1)?;
            if budget == 0 {
                return Err(WireError::RecursionTooDeep);
            }
            budget -= 1;
            resume_at.get_or_insert(pos + 2);
            pos = (((len & !POINTER_MASK) as usize) << 8) | low as usize;
            continue;
        }

        let mut labels = cursor.at(pos + 1);
        let label = labels.read_bytes(len as usize)?;
        name.push_str(&String::from_utf8_lossy(label));
        name.push('.');
        pos = labels.position();
    }

    if name.ends_with('.') {
        name.pop();
    }

    Ok((name, resume_at.unwrap_or(pos)))
}

/// Reads a name at the cursor and advances past it.
pub fn read_name(cursor: &mut WireCursor<'_>) -> Result<String, WireError> {
    let (name, next) = decode_name(cursor.buffer(), cursor.position(), DEFAULT_POINTER_BUDGET)?;
    cursor.seek(next)?;
    Ok(name)
}
