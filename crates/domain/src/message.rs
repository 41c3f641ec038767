//! DNS message model (RFC 1035 §4.1).
//!
//! Built by the wire decoder and only read afterwards.

use crate::{DomainName, RecordType, ResourceRecord};
use std::net::IpAddr;

/// The Internet class, the only class this resolver asks about.
pub const CLASS_IN: u16 = 1;

pub const FLAG_QR: u16 = 1 << 15;
pub const FLAG_AA: u16 = 1 << 10;
pub const FLAG_TC: u16 = 1 << 9;

/// Low four bits of the flags word.
pub const RCODE_MASK: u16 = 0x000F;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    NoError,
    FormatError,
    ServerFailure,
    NameError,
    NotImplemented,
    Refused,
    Other(u8),
}

impl ResponseCode {
    pub fn from_u8(code: u8) -> Self {
        match code {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormatError,
            2 => ResponseCode::ServerFailure,
            3 => ResponseCode::NameError,
            4 => ResponseCode::NotImplemented,
            5 => ResponseCode::Refused,
            other => ResponseCode::Other(other),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormatError => "FORMERR",
            ResponseCode::ServerFailure => "SERVFAIL",
            ResponseCode::NameError => "NXDOMAIN",
            ResponseCode::NotImplemented => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::Other(_) => "UNKNOWN",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub id: u16,
    pub flags: u16,
}

impl Header {
    /// Header of an iterative query: QR, OPCODE and RD all zero.
    pub fn query(id: u16) -> Self {
        Self { id, flags: 0 }
    }

    pub fn is_response(&self) -> bool {
        self.flags & FLAG_QR != 0
    }

    pub fn authoritative(&self) -> bool {
        self.flags & FLAG_AA != 0
    }

    pub fn truncated(&self) -> bool {
        self.flags & FLAG_TC != 0
    }

    pub fn response_code(&self) -> ResponseCode {
        ResponseCode::from_u8((self.flags & RCODE_MASK) as u8)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: DomainName,
    pub record_type: RecordType,
    pub class: u16,
}

impl Question {
    pub fn new(name: DomainName, record_type: RecordType) -> Self {
        Self {
            name,
            record_type,
            class: CLASS_IN,
        }
    }
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
    /// A single-question, non-recursive query.
    pub fn query(id: u16, name: DomainName, record_type: RecordType) -> Self {
        Self {
            header: Header::query(id),
            questions: vec![Question::new(name, record_type)],
            answers: vec![],
            authorities: vec![],
            additionals: vec![],
        }
    }

    pub fn is_authoritative(&self) -> bool {
        self.header.authoritative()
    }

    /// Every A and AAAA record of the answer section, in order.
    pub fn answer_addresses(&self) -> Vec<IpAddr> {
        self.answers
            .iter()
            .filter_map(ResourceRecord::address)
            .collect()
    }

    /// Target of the first CNAME in the answer section owned by `name`.
    pub fn cname_for(&self, name: &DomainName) -> Option<&DomainName> {
        self.answers
            .iter()
            .filter(|record| &record.name == name)
            .find_map(ResourceRecord::cname_target)
    }
}
