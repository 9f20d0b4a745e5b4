use super::message_builder::HEADER_LEN;
use super::rdata::decode_rdata;
use crate::dns::cache::clock::unix_now_secs;
use crate::dns::wire::{read_name, WireCursor, WireError};
use ferrous_stub_domain::{
    DnsClass, DomainError, Header, Message, Question, RecordType, ResourceRecord, ResponseCode,
};
use tracing::debug;

/// Upper bound used as the starting minimum when a message has no records.
pub const TTL_SENTINEL_SECS: u32 = 7 * 24 * 60 * 60;

/// Lowest message TTL ever reported.
pub const MIN_MESSAGE_TTL_SECS: u32 = 120;

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<Message, DomainError> {
        Self::parse_at(response_bytes, unix_now_secs())
    }

    /// Decodes a response with `now_secs` as the reference time for every
    /// absolute expiry it computes.
    pub fn parse_at(response_bytes: &[u8], now_secs: u64) -> Result<Message, DomainError> {
        if response_bytes.len() < HEADER_LEN {
            return Err(DomainError::MalformedResponse(format!(
                "response of {} bytes is shorter than the {}-byte header",
                response_bytes.len(),
                HEADER_LEN
            )));
        }

        let mut cursor = WireCursor::new(response_bytes);
        let mut header = read_header(&mut cursor)?;

        if !header.rcode.is_success() {
            debug!(
                id = header.id,
                rcode = %header.rcode,
                "Response carries error code, skipping sections"
            );
            header.expires_at_secs = now_secs;
            return Ok(Message {
                header,
                questions: Vec::new(),
                answers: Vec::new(),
                authorities: Vec::new(),
                additionals: Vec::new(),
            });
        }

        let questions = (0..header.question_count)
            .map(|_| read_question(&mut cursor))
            .collect::<Result<Vec<_>, _>>()?;
        let answers = read_section(&mut cursor, header.answer_count, now_secs)?;
        let authorities = read_section(&mut cursor, header.authority_count, now_secs)?;
        let additionals = read_section(&mut cursor, header.additional_count, now_secs)?;

        let min_ttl = answers
            .iter()
            .chain(authorities.iter())
            .chain(additionals.iter())
            .map(|record| record.ttl)
            .fold(TTL_SENTINEL_SECS, u32::min);

        header.ttl = min_ttl.max(MIN_MESSAGE_TTL_SECS);
        header.expires_at_secs = now_secs + header.ttl as u64;

        debug!(
            id = header.id,
            answers = answers.len(),
            authorities = authorities.len(),
            additionals = additionals.len(),
            ttl = header.ttl,
            truncated = header.truncated,
            "Parsed DNS response"
        );

        Ok(Message {
            header,
            questions,
            answers,
            authorities,
            additionals,
        })
    }
}

fn read_header(cursor: &mut WireCursor<'_>) -> Result<Header, WireError> {
    let id = cursor.read_u16()?;
    let flags = cursor.read_u8()?;
    let codes = cursor.read_u8()?;

    Ok(Header {
        id,
        is_response: flags / 128 == 1,
        opcode: (flags / 8) % 16,
        authoritative: (flags / 4) % 2 == 1,
        truncated: (flags / 2) % 2 == 1,
        recursion_desired: flags % 2 == 1,
        recursion_available: codes / 128 == 1,
        rcode: ResponseCode(codes % 128),
        question_count: cursor.read_u16()?,
        answer_count: cursor.read_u16()?,
        authority_count: cursor.read_u16()?,
        additional_count: cursor.read_u16()?,
        ttl: 0,
        expires_at_secs: 0,
    })
}

fn read_question(cursor: &mut WireCursor<'_>) -> Result<Question, WireError> {
    let name = read_name(cursor)?;
    let qtype = RecordType::from_u16(cursor.read_u16()?);
    let qclass = DnsClass::from_u16(cursor.read_u16()?);
    Ok(Question {
        name,
        qtype,
        qclass,
    })
}

fn read_section(
    cursor: &mut WireCursor<'_>,
    count: u16,
    now_secs: u64,
) -> Result<Vec<ResourceRecord>, WireError> {
    let mut records = Vec::with_capacity(count as usize);
    for _ in 0..count {
        records.push(read_record(cursor, now_secs)?);
    }
    Ok(records)
}

fn read_record(cursor: &mut WireCursor<'_>, now_secs: u64) -> Result<ResourceRecord, WireError> {
    let name = read_name(cursor)?;
    let record_type = RecordType::from_u16(cursor.read_u16()?);
    let class = DnsClass::from_u16(cursor.read_u16()?);
    let ttl = cursor.read_u32()?;
    let rdlength = cursor.read_u16()? as usize;

    let rdata_start = cursor.position();
    let rdata = cursor.read_bytes(rdlength)?.to_vec();
    let data = decode_rdata(cursor.buffer(), record_type, rdata_start, rdlength)?;

    Ok(ResourceRecord {
        name,
        record_type,
        class,
        ttl,
        expires_at_secs: now_secs + ttl as u64,
        data,
        rdata,
    })
}
