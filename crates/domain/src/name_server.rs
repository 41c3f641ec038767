use crate::DomainName;
use std::fmt;
use std::net::Ipv4Addr;

/// A nameserver as seen by the resolver: its hostname and, once known, its
/// IPv4 address. Referrals without glue produce address-less entries until
/// the hostname is looked up.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NameServer {
    pub name: DomainName,
    pub address: Option<Ipv4Addr>,
}

impl NameServer {
    pub fn new(name: DomainName, address: Ipv4Addr) -> Self {
        Self {
            name,
            address: Some(address),
        }
    }

    pub fn unresolved(name: DomainName) -> Self {
        Self {
            name,
            address: None,
        }
    }

    pub fn with_address(&self, address: Ipv4Addr) -> Self {
        Self {
            name: self.name.clone(),
            address: Some(address),
        }
    }

    pub fn has_address(&self) -> bool {
        self.address.is_some()
    }
}

impl fmt::Display for NameServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.address {
            Some(ip) => write!(f, "{} ({})", self.name, ip),
            None => write!(f, "{} (no IP address)", self.name),
        }
    }
}
