use crate::{DomainName, Message, NameServer, RecordData};
use std::collections::HashMap;
use std::net::Ipv4Addr;

/// Nameservers a non-authoritative response delegates to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Referral {
    /// Owner of the NS records. When several are present the last one wins.
    pub zone: Option<DomainName>,

    /// Delegated nameservers in authority-section order, each paired with
    /// its glue address when the additional section carried one.
    pub nameservers: Vec<NameServer>,
}

impl Referral {
    pub fn is_empty(&self) -> bool {
        self.nameservers.is_empty()
    }

    pub fn zone_display(&self) -> String {
        self.zone
            .as_ref()
            .map(|zone| zone.to_string())
            .unwrap_or_else(|| "(unknown domain)".to_string())
    }
}

/// Reads the delegation out of a response.
///
/// Only A records in the additional section count as glue; AAAA glue is
/// skipped because queries are only ever sent over IPv4. An authority
/// section without NS records yields an empty referral.
pub fn extract_referral(message: &Message) -> Referral {
    let mut zone = None;
    let mut names = Vec::new();

    for record in &message.authorities {
        if let Some(nameserver) = record.ns_name() {
            zone = Some(record.name.clone());
            names.push(nameserver.clone());
        }
    }

    let mut glue: HashMap<&DomainName, Ipv4Addr> = HashMap::new();
    for record in &message.additionals {
        if let RecordData::A(ip) = record.data {
            glue.entry(&record.name).or_insert(ip);
        }
    }

    let nameservers = names
        .into_iter()
        .map(|name| match glue.get(&name) {
            Some(ip) => NameServer::new(name, *ip),
            None => NameServer::unresolved(name),
        })
        .collect();

    Referral { zone, nameservers }
}
