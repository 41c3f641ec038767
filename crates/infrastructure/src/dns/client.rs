use async_trait::async_trait;
use rootwalk_application::ports::NameserverTransport;
use rootwalk_domain::{DomainError, DomainName, Message, RecordType, ResolverConfig};
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;
use tracing::{debug, warn};

use super::codec::{QueryBuilder, ResponseParser};
use super::transport::{UdpTransport, DEFAULT_MAX_PAYLOAD};

/// Sends one non-recursive query per call over a fresh UDP socket.
pub struct UdpNameserverClient {
    port: u16,
    timeout: Duration,
    max_payload: usize,
    fixed_transaction_id: Option<u16>,
}

impl UdpNameserverClient {
    pub fn new(port: u16, timeout: Duration) -> Self {
        Self {
            port,
            timeout,
            max_payload: DEFAULT_MAX_PAYLOAD,
            fixed_transaction_id: None,
        }
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        Self {
            port: config.port,
            timeout: config.query_timeout(),
            max_payload: config.max_udp_payload,
            fixed_transaction_id: config.fixed_transaction_id,
        }
    }

    /// Use `id` for every query instead of a random one.
    pub fn with_fixed_transaction_id(mut self, id: u16) -> Self {
        self.fixed_transaction_id = Some(id);
        self
    }

    fn next_transaction_id(&self) -> u16 {
        self.fixed_transaction_id
            .unwrap_or_else(|| fastrand::u16(..))
    }
}

#[async_trait]
impl NameserverTransport for UdpNameserverClient {
    async fn query(
        &self,
        name: &DomainName,
        record_type: RecordType,
        server: Ipv4Addr,
    ) -> Result<Message, DomainError> {
        let id = self.next_transaction_id();
        let query = QueryBuilder::build(id, name, record_type)?;

        let transport = UdpTransport::new(SocketAddr::from((server, self.port)), self.timeout)
            .with_max_payload(self.max_payload);
        let response = transport.exchange(&query).await?;

        let message = ResponseParser::parse(&response)?;

        if message.header.id != id {
            return Err(DomainError::Protocol(format!(
                "transaction id mismatch from {}: sent {:#06x}, got {:#06x}",
                server, id, message.header.id
            )));
        }

        if !message.header.is_response() {
            return Err(DomainError::Protocol(format!(
                "{} answered with a message that is not a response",
                server
            )));
        }

        if message.header.truncated() {
            warn!(server = %server, "Response truncated, using the partial message");
        }

        debug!(
            server = %server,
            rcode = message.header.response_code().as_str(),
            answers = message.answers.len(),
            authorities = message.authorities.len(),
            additionals = message.additionals.len(),
            "Decoded response"
        );

        Ok(message)
    }
}
