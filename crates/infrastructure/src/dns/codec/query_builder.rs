//! Query construction in wire format using `hickory-proto`.

use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use rootwalk_domain::{DomainError, DomainName, RecordType};
use std::str::FromStr;

/// Builds single-question, non-recursive query messages.
pub struct QueryBuilder;

impl QueryBuilder {
    /// Serializes a query for `domain`/`record_type` in class IN.
    ///
    /// The header carries `id` with QR, OPCODE and RD all zero. Fails only
    /// when the name cannot be put on the wire.
    pub fn build(
        id: u16,
        domain: &DomainName,
        record_type: RecordType,
    ) -> Result<Vec<u8>, DomainError> {
        let name = Name::from_str(domain.as_str()).map_err(|e| {
            DomainError::InvalidDomainName(format!("'{}' cannot be encoded: {}", domain, e))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordTypeMapper::to_hickory(record_type));
        query.set_query_class(DNSClass::IN);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(false);
        message.add_query(query);

        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);
        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDomainName(format!(
                "failed to serialize query for '{}': {}",
                domain, e
            ))
        })?;

        Ok(buf)
    }
}
