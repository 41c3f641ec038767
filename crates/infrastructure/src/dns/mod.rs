pub mod client;
pub mod codec;
pub mod transport;

pub use client::UdpNameserverClient;
pub use codec::{QueryBuilder, RecordTypeMapper, ResponseParser};
pub use transport::UdpTransport;
