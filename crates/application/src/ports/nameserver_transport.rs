use async_trait::async_trait;
use rootwalk_domain::{DomainError, DomainName, Message, RecordType};
use std::net::Ipv4Addr;

/// One question to one nameserver.
///
/// Implementations fail with `DomainError::Dial`, `DomainError::Timeout` or
/// `DomainError::Protocol`; the resolver treats all three as a failed server.
#[async_trait]
pub trait NameserverTransport: Send + Sync {
    async fn query(
        &self,
        name: &DomainName,
        record_type: RecordType,
        server: Ipv4Addr,
    ) -> Result<Message, DomainError>;
}
