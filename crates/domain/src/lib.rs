//! Rootwalk Domain Layer
//!
//! Pure types shared by every layer: names, records, messages, referral
//! rules, resolution outcomes, errors and configuration.
pub mod config;
pub mod dns_record;
pub mod domain_name;
pub mod errors;
pub mod message;
pub mod name_server;
pub mod referral;
pub mod resolution;
pub mod root_hints;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, ResolverConfig};
pub use dns_record::{RecordData, RecordType, ResourceRecord};
pub use domain_name::DomainName;
pub use errors::DomainError;
pub use message::{Header, Message, Question, ResponseCode};
pub use name_server::NameServer;
pub use referral::{extract_referral, Referral};
pub use resolution::Resolution;
