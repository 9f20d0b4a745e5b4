use ferrous_stub_domain::RecordType;
use ferrous_stub_infrastructure::dns::wire::encode_name;

/// Id of an encoded query or response.
pub fn query_id(message: &[u8]) -> u16 {
    u16::from_be_bytes([message[0], message[1]])
}

/// One resource record in wire format, name written uncompressed.
pub fn record_bytes(name: &str, type_code: u16, ttl: u32, rdata: &[u8]) -> Vec<u8> {
    let mut out = encode_name(name).unwrap();
    out.extend_from_slice(&type_code.to_be_bytes());
    out.extend_from_slice(&1u16.to_be_bytes());
    out.extend_from_slice(&ttl.to_be_bytes());
    out.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    out.extend_from_slice(rdata);
    out
}

/// Builds response messages byte by byte.
///
/// Defaults to a NOERROR response with QR, RD and RA set.
pub struct ResponseBuilder {
    id: u16,
    flags: u8,
    codes: u8,
    questions: Vec<Vec<u8>>,
    answers: Vec<Vec<u8>>,
    authorities: Vec<Vec<u8>>,
    additionals: Vec<Vec<u8>>,
    counts: Option<[u16; 4]>,
    trailer: Vec<u8>,
}

impl ResponseBuilder {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            flags: 0x81,
            codes: 0x80,
            questions: Vec::new(),
            answers: Vec::new(),
            authorities: Vec::new(),
            additionals: Vec::new(),
            counts: None,
            trailer: Vec::new(),
        }
    }

    pub fn flags(mut self, flags: u8) -> Self {
        self.flags = flags;
        self
    }

    /// Raw second flag byte (RA + RCODE).
    pub fn codes(mut self, codes: u8) -> Self {
        self.codes = codes;
        self
    }

    pub fn rcode(mut self, rcode: u8) -> Self {
        self.codes = (self.codes & 0x80) | (rcode & 0x7F);
        self
    }

    pub fn question(mut self, name: &str, record_type: RecordType) -> Self {
        let mut q = encode_name(name).unwrap();
        q.extend_from_slice(&record_type.to_u16().to_be_bytes());
        q.extend_from_slice(&1u16.to_be_bytes());
        self.questions.push(q);
        self
    }

    pub fn answer(mut self, name: &str, record_type: RecordType, ttl: u32, rdata: &[u8]) -> Self {
        self.answers
            .push(record_bytes(name, record_type.to_u16(), ttl, rdata));
        self
    }

    pub fn authority(mut self, name: &str, record_type: RecordType, ttl: u32, rdata: &[u8]) -> Self {
        self.authorities
            .push(record_bytes(name, record_type.to_u16(), ttl, rdata));
        self
    }

    pub fn additional(mut self, name: &str, record_type: RecordType, ttl: u32, rdata: &[u8]) -> Self {
        self.additionals
            .push(record_bytes(name, record_type.to_u16(), ttl, rdata));
        self
    }

    pub fn a(self, name: &str, ttl: u32, octets: [u8; 4]) -> Self {
        self.answer(name, RecordType::A, ttl, &octets)
    }

    /// Overrides the four section counts written into the header.
    pub fn counts(mut self, counts: [u16; 4]) -> Self {
        self.counts = Some(counts);
        self
    }

    /// Bytes appended after the last section.
    pub fn trailer(mut self, bytes: &[u8]) -> Self {
        self.trailer.extend_from_slice(bytes);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let counts = self.counts.unwrap_or([
            self.questions.len() as u16,
            self.answers.len() as u16,
            self.authorities.len() as u16,
            self.additionals.len() as u16,
        ]);

        let mut out = Vec::with_capacity(512);
        out.extend_from_slice(&self.id.to_be_bytes());
        out.push(self.flags);
        out.push(self.codes);
        for count in counts {
            out.extend_from_slice(&count.to_be_bytes());
        }
        for section in [
            &self.questions,
            &self.answers,
            &self.authorities,
            &self.additionals,
        ] {
            for entry in section {
                out.extend_from_slice(entry);
            }
        }
        out.extend_from_slice(&self.trailer);
        out
    }
}
