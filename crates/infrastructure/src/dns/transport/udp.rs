//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing). One socket is opened per exchange
//! and dropped with it. Responses longer than the receive buffer are cut
//! short; there is no TCP retry.

use rootwalk_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

use super::DEFAULT_MAX_PAYLOAD;

/// DNS over UDP transport bound to one server address.
pub struct UdpTransport {
    server_addr: SocketAddr,
    timeout: Duration,
    max_payload: usize,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr, timeout: Duration) -> Self {
        Self {
            server_addr,
            timeout,
            max_payload: DEFAULT_MAX_PAYLOAD,
        }
    }

    pub fn with_max_payload(mut self, max_payload: usize) -> Self {
        self.max_payload = max_payload;
        self
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    /// Sends `message_bytes` and waits for one datagram back. The write and
    /// the read each get the full timeout.
    pub async fn exchange(&self, message_bytes: &[u8]) -> Result<Vec<u8>, DomainError> {
        let server = self.server_addr.to_string();

        let bind_addr = SocketAddr::from(([0, 0, 0, 0], 0));
        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| DomainError::Dial {
                server: server.clone(),
                reason: format!("failed to bind UDP socket: {}", e),
            })?;

        socket
            .connect(self.server_addr)
            .await
            .map_err(|e| DomainError::Dial {
                server: server.clone(),
                reason: e.to_string(),
            })?;

        let bytes_sent = tokio::time::timeout(self.timeout, socket.send(message_bytes))
            .await
            .map_err(|_| DomainError::Timeout {
                server: server.clone(),
            })?
            .map_err(|e| DomainError::Dial {
                server: server.clone(),
                reason: format!("failed to send query: {}", e),
            })?;

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; self.max_payload];

        let bytes_received = tokio::time::timeout(self.timeout, socket.recv(&mut recv_buf))
            .await
            .map_err(|_| DomainError::Timeout {
                server: server.clone(),
            })?
            .map_err(|e| DomainError::Dial {
                server: server.clone(),
                reason: format!("failed to receive response: {}", e),
            })?;

        recv_buf.truncate(bytes_received);

        debug!(
            server = %self.server_addr,
            bytes_received = bytes_received,
            "UDP response received"
        );

        Ok(recv_buf)
    }
}
