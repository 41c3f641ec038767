//! Bootstrap table of the IANA root servers.
//! See <https://www.iana.org/domains/root/servers>.

use crate::{DomainName, NameServer};
use std::net::Ipv4Addr;

pub const ROOT_SERVERS: [(&str, Ipv4Addr); 13] = [
    ("a.root-servers.net.", Ipv4Addr::new(198, 41, 0, 4)),
    ("b.root-servers.net.", Ipv4Addr::new(170, 247, 170, 2)),
    ("c.root-servers.net.", Ipv4Addr::new(192, 33, 4, 12)),
    ("d.root-servers.net.", Ipv4Addr::new(199, 7, 91, 13)),
    ("e.root-servers.net.", Ipv4Addr::new(192, 203, 230, 10)),
    ("f.root-servers.net.", Ipv4Addr::new(192, 5, 5, 241)),
    ("g.root-servers.net.", Ipv4Addr::new(192, 112, 36, 4)),
    ("h.root-servers.net.", Ipv4Addr::new(198, 97, 190, 53)),
    ("i.root-servers.net.", Ipv4Addr::new(192, 36, 148, 17)),
    ("j.root-servers.net.", Ipv4Addr::new(192, 58, 128, 30)),
    ("k.root-servers.net.", Ipv4Addr::new(193, 0, 14, 129)),
    ("l.root-servers.net.", Ipv4Addr::new(199, 7, 83, 42)),
    ("m.root-servers.net.", Ipv4Addr::new(202, 12, 27, 33)),
];

pub fn root_servers() -> Vec<NameServer> {
    ROOT_SERVERS
        .iter()
        .filter_map(|(name, ip)| {
            name.parse::<DomainName>()
                .ok()
                .map(|name| NameServer::new(name, *ip))
        })
        .collect()
}
