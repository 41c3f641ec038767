#![allow(dead_code)]
use rootwalk_domain::{DomainName, Header, Message, RecordType, ResourceRecord};
use std::net::{Ipv4Addr, Ipv6Addr};

pub fn name(s: &str) -> DomainName {
    s.parse().unwrap()
}

pub struct ResponseBuilder {
    message: Message,
}

impl ResponseBuilder {
    pub fn new(query_name: &str) -> Self {
        let mut message = Message::query(1, name(query_name), RecordType::A);
        message.header = Header {
            id: 1,
            flags: 0x8000,
        };
        Self { message }
    }

    pub fn authoritative(mut self) -> Self {
        self.message.header.flags |= 0x0400;
        self
    }

    pub fn answer_a(mut self, owner: &str, ip: [u8; 4]) -> Self {
        self.message
            .answers
            .push(ResourceRecord::a(name(owner), 300, Ipv4Addr::from(ip)));
        self
    }

    pub fn ns(mut self, zone: &str, nameserver: &str) -> Self {
        self.message
            .authorities
            .push(ResourceRecord::ns(name(zone), 172800, name(nameserver)));
        self
    }

    pub fn glue_a(mut self, owner: &str, ip: [u8; 4]) -> Self {
        self.message
            .additionals
            .push(ResourceRecord::a(name(owner), 172800, Ipv4Addr::from(ip)));
        self
    }

    pub fn glue_aaaa(mut self, owner: &str, ip: Ipv6Addr) -> Self {
        self.message
            .additionals
            .push(ResourceRecord::aaaa(name(owner), 172800, ip));
        self
    }

    pub fn build(self) -> Message {
        self.message
    }
}
