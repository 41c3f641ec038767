//! DNS wire format, delegated to `hickory-proto`.
//!
//! Queries are built as hickory messages. Responses are parsed by hickory
//! and mapped onto the domain message model.

mod query_builder;
mod record_type_map;
mod response_parser;

pub use query_builder::QueryBuilder;
pub use record_type_map::RecordTypeMapper;
pub use response_parser::ResponseParser;
