#![allow(dead_code)]
use ferrous_stub_domain::{
    DnsClass, Header, Message, MxData, RecordData, RecordType, ResourceRecord, ResponseCode,
    SoaData,
};

pub struct RecordBuilder {
    name: String,
    record_type: RecordType,
    ttl: u32,
    data: RecordData,
}

impl RecordBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            record_type: RecordType::A,
            ttl: 300,
            data: RecordData::Text("192.0.2.1".to_string()),
        }
    }

    pub fn a(mut self, address: &str) -> Self {
        self.record_type = RecordType::A;
        self.data = RecordData::Text(address.to_string());
        self
    }

    pub fn cname(mut self, target: &str) -> Self {
        self.record_type = RecordType::CNAME;
        self.data = RecordData::Text(target.to_string());
        self
    }

    pub fn mx(mut self, priority: u16, exchange: &str) -> Self {
        self.record_type = RecordType::MX;
        self.data = RecordData::Mx(MxData {
            priority,
            exchange: exchange.to_string(),
        });
        self
    }

    pub fn soa(mut self, soa: SoaData) -> Self {
        self.record_type = RecordType::SOA;
        self.data = RecordData::Soa(soa);
        self
    }

    pub fn unknown(mut self, code: u16) -> Self {
        self.record_type = RecordType::Unknown(code);
        self.data = RecordData::Empty;
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn build(self) -> ResourceRecord {
        ResourceRecord {
            name: self.name,
            record_type: self.record_type,
            class: DnsClass::IN,
            ttl: self.ttl,
            expires_at_secs: 1_000 + self.ttl as u64,
            data: self.data,
            rdata: Vec::new(),
        }
    }
}

pub fn empty_header() -> Header {
    Header {
        id: 1,
        is_response: true,
        opcode: 0,
        authoritative: false,
        truncated: false,
        recursion_desired: true,
        recursion_available: true,
        rcode: ResponseCode::NO_ERROR,
        question_count: 0,
        answer_count: 0,
        authority_count: 0,
        additional_count: 0,
        ttl: 300,
        expires_at_secs: 1_300,
    }
}

pub fn message_with(
    answers: Vec<ResourceRecord>,
    authorities: Vec<ResourceRecord>,
    additionals: Vec<ResourceRecord>,
) -> Message {
    let mut header = empty_header();
    header.answer_count = answers.len() as u16;
    header.authority_count = authorities.len() as u16;
    header.additional_count = additionals.len() as u16;
    Message {
        header,
        questions: Vec::new(),
        answers,
        authorities,
        additionals,
    }
}
