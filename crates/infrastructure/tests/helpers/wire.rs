#![allow(dead_code)]

/// Uncompressed wire form of a dotted name.
pub fn name_bytes(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

/// Hand-assembled response messages. Owner names are raw bytes so tests can
/// place compression pointers wherever they like.
pub struct WireBuilder {
    id: u16,
    flags: u16,
    question: Vec<u8>,
    qdcount: u16,
    sections: [Vec<u8>; 3],
    counts: [u16; 3],
}

pub const ANSWER: usize = 0;
pub const AUTHORITY: usize = 1;
pub const ADDITIONAL: usize = 2;

impl WireBuilder {
    pub fn response(id: u16) -> Self {
        Self {
            id,
            flags: 0x8000,
            question: Vec::new(),
            qdcount: 0,
            sections: [Vec::new(), Vec::new(), Vec::new()],
            counts: [0; 3],
        }
    }

    pub fn authoritative(mut self) -> Self {
        self.flags |= 0x0400;
        self
    }

    pub fn truncated(mut self) -> Self {
        self.flags |= 0x0200;
        self
    }

    /// Question for `name` type `qtype` class IN. Its name starts at offset 12.
    pub fn question(mut self, name: &str, qtype: u16) -> Self {
        self.question.extend_from_slice(&name_bytes(name));
        self.question.extend_from_slice(&qtype.to_be_bytes());
        self.question.extend_from_slice(&1u16.to_be_bytes());
        self.qdcount += 1;
        self
    }

    pub fn record(mut self, section: usize, owner: &[u8], rtype: u16, rdata: &[u8]) -> Self {
        let buf = &mut self.sections[section];
        buf.extend_from_slice(owner);
        buf.extend_from_slice(&rtype.to_be_bytes());
        buf.extend_from_slice(&1u16.to_be_bytes());
        buf.extend_from_slice(&3600u32.to_be_bytes());
        buf.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        buf.extend_from_slice(rdata);
        self.counts[section] += 1;
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&self.id.to_be_bytes());
        out.extend_from_slice(&self.flags.to_be_bytes());
        out.extend_from_slice(&self.qdcount.to_be_bytes());
        for count in self.counts {
            out.extend_from_slice(&count.to_be_bytes());
        }
        out.extend_from_slice(&self.question);
        for section in &self.sections {
            out.extend_from_slice(section);
        }
        out
    }
}

/// Pointer to the question name at offset 12.
pub const QNAME_PTR: [u8; 2] = [0xC0, 0x0C];
