//! Datagram exchange with a single nameserver.

pub mod udp;

pub use udp::UdpTransport;

/// Classic DNS-over-UDP message size limit (RFC 1035 §4.2.1).
pub const DEFAULT_MAX_PAYLOAD: usize = 512;
