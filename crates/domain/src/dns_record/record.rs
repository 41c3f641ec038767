use super::RecordType;
use crate::DomainName;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Decoded RDATA. Only the shapes the resolver acts on are interpreted; all
/// other types keep their raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    NS(DomainName),
    CNAME(DomainName),
    Other(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: DomainName,

    pub record_type: RecordType,

    pub class: u16,

    pub ttl: u32,

    pub data: RecordData,
}

impl ResourceRecord {
    pub fn new(name: DomainName, record_type: RecordType, ttl: u32, data: RecordData) -> Self {
        Self {
            name,
            record_type,
            class: crate::message::CLASS_IN,
            ttl,
            data,
        }
    }

    pub fn a(name: DomainName, ttl: u32, ip: Ipv4Addr) -> Self {
        Self::new(name, RecordType::A, ttl, RecordData::A(ip))
    }

    pub fn aaaa(name: DomainName, ttl: u32, ip: Ipv6Addr) -> Self {
        Self::new(name, RecordType::AAAA, ttl, RecordData::AAAA(ip))
    }

    pub fn ns(name: DomainName, ttl: u32, nameserver: DomainName) -> Self {
        Self::new(name, RecordType::NS, ttl, RecordData::NS(nameserver))
    }

    pub fn cname(name: DomainName, ttl: u32, target: DomainName) -> Self {
        Self::new(name, RecordType::CNAME, ttl, RecordData::CNAME(target))
    }

    pub fn address(&self) -> Option<IpAddr> {
        match self.data {
            RecordData::A(ip) => Some(IpAddr::V4(ip)),
            RecordData::AAAA(ip) => Some(IpAddr::V6(ip)),
            _ => None,
        }
    }

    pub fn ns_name(&self) -> Option<&DomainName> {
        match &self.data {
            RecordData::NS(name) => Some(name),
            _ => None,
        }
    }

    pub fn cname_target(&self) -> Option<&DomainName> {
        match &self.data {
            RecordData::CNAME(name) => Some(name),
            _ => None,
        }
    }
}
