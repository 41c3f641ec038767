use crate::{DomainName, NameServer, RecordType};
use std::net::IpAddr;

/// Outcome of a lookup that reached an authoritative server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub domain: DomainName,
    pub record_type: RecordType,
    /// Every A and AAAA answer, in the order the server sent them.
    pub addresses: Vec<IpAddr>,
    /// Alias reported for `domain`, if the answer carried one. Not followed.
    pub cname: Option<DomainName>,
    /// The server that gave the authoritative answer.
    pub server: NameServer,
    pub queries_sent: usize,
}

impl Resolution {
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}
