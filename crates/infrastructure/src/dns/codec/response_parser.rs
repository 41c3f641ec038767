//! Response parsing with `hickory-proto`.
//!
//! hickory does the wire work: compression pointers, label bounds and
//! RDATA lengths. This module only maps the parsed message onto the domain
//! model. Parsing is all-or-nothing, any malformation yields
//! `DomainError::Protocol` and no partial message.

use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Message as WireMessage, MessageType};
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::BinEncodable;
use rootwalk_domain::message::{FLAG_AA, FLAG_QR, FLAG_TC, RCODE_MASK};
use rootwalk_domain::{
    DomainError, DomainName, Header, Message, Question, RecordData, ResourceRecord,
};
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<Message, DomainError> {
        let wire = WireMessage::from_vec(response_bytes)
            .map_err(|e| protocol(format!("failed to parse DNS response: {}", e)))?;

        let questions = wire
            .queries()
            .iter()
            .map(|query| {
                Ok(Question {
                    name: domain_name(query.name())?,
                    record_type: RecordTypeMapper::from_hickory(query.query_type()),
                    class: u16::from(query.query_class()),
                })
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        let message = Message {
            header: header_of(&wire),
            questions,
            answers: map_records(wire.answers())?,
            authorities: map_records(wire.name_servers())?,
            additionals: map_records(wire.additionals())?,
        };

        debug!(
            id = message.header.id,
            truncated = message.header.truncated(),
            answers = message.answers.len(),
            authorities = message.authorities.len(),
            additionals = message.additionals.len(),
            "DNS response parsed"
        );

        Ok(message)
    }
}

fn protocol(reason: impl Into<String>) -> DomainError {
    DomainError::Protocol(reason.into())
}

fn header_of(wire: &WireMessage) -> Header {
    let mut flags = u16::from(wire.response_code()) & RCODE_MASK;
    if wire.message_type() == MessageType::Response {
        flags |= FLAG_QR;
    }
    if wire.authoritative() {
        flags |= FLAG_AA;
    }
    if wire.truncated() {
        flags |= FLAG_TC;
    }
    Header {
        id: wire.id(),
        flags,
    }
}

/// Wire names keep every octet; only the length limits apply.
fn domain_name(name: &Name) -> Result<DomainName, DomainError> {
    DomainName::from_wire_labels(name.iter())
        .map_err(|e| protocol(format!("bad name {}: {}", name, e)))
}

fn map_records(records: &[Record]) -> Result<Vec<ResourceRecord>, DomainError> {
    records.iter().map(map_record).collect()
}

fn map_record(record: &Record) -> Result<ResourceRecord, DomainError> {
    let name = domain_name(record.name())?;

    let data = match record.data() {
        RData::A(a) => RecordData::A(a.0),
        RData::AAAA(aaaa) => RecordData::AAAA(aaaa.0),
        RData::NS(ns) => RecordData::NS(domain_name(&ns.0)?),
        RData::CNAME(cname) => RecordData::CNAME(domain_name(&cname.0)?),
        other => RecordData::Other(other.to_bytes().map_err(|e| {
            protocol(format!("cannot re-encode data of {}: {}", name, e))
        })?),
    };

    let mut mapped = ResourceRecord::new(
        name,
        RecordTypeMapper::from_hickory(record.record_type()),
        record.ttl(),
        data,
    );
    mapped.class = u16::from(record.dns_class());
    Ok(mapped)
}
