#![allow(dead_code)]
use rootwalk_domain::{DomainName, Header, Message, NameServer, RecordType, ResourceRecord};
use std::net::{Ipv4Addr, Ipv6Addr};

pub fn name(s: &str) -> DomainName {
    s.parse().unwrap()
}

pub fn root(label: &str, ip: [u8; 4]) -> NameServer {
    NameServer::new(name(&format!("{}.root-servers.net.", label)), Ipv4Addr::from(ip))
}

pub struct ResponseBuilder {
    message: Message,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        let mut message = Message::query(1, name("example.com."), RecordType::A);
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

    pub fn answer_aaaa(mut self, owner: &str, ip: Ipv6Addr) -> Self {
        self.message
            .answers
            .push(ResourceRecord::aaaa(name(owner), 300, ip));
        self
    }

    pub fn answer_cname(mut self, owner: &str, target: &str) -> Self {
        self.message
            .answers
            .push(ResourceRecord::cname(name(owner), 300, name(target)));
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

    pub fn build(self) -> Message {
        self.message
    }
}

impl Default for ResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Authoritative answer `example.com. A 93.184.216.34`.
pub fn example_answer() -> Message {
    ResponseBuilder::new()
        .authoritative()
        .answer_a("example.com.", [93, 184, 216, 34])
        .build()
}

/// Referral to `ns1.example.com.` with glue `10.0.0.1`.
pub fn glued_referral() -> Message {
    ResponseBuilder::new()
        .ns("example.com.", "ns1.example.com.")
        .glue_a("ns1.example.com.", [10, 0, 0, 1])
        .build()
}
