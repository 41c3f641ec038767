#![allow(dead_code)]

use async_trait::async_trait;
use rootwalk_application::ports::{HostResolver, NameserverTransport};
use rootwalk_domain::{DomainError, DomainName, Message, RecordType};
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Mutex;

#[derive(Clone)]
pub enum Reply {
    Respond(Message),
    Fail(DomainError),
}

pub fn timeout(server: Ipv4Addr) -> Reply {
    Reply::Fail(DomainError::Timeout {
        server: format!("{}:53", server),
    })
}

/// Scripted nameservers keyed by address. Each address replays its replies
/// in order and then repeats the last one. Unknown addresses time out.
/// Replies queued with `failing_first` are served before any script,
/// whichever server is asked.
pub struct MockTransport {
    scripts: Mutex<HashMap<Ipv4Addr, Vec<Reply>>>,
    leading: Mutex<Vec<Reply>>,
    queried: Mutex<Vec<Ipv4Addr>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            scripts: Mutex::new(HashMap::new()),
            leading: Mutex::new(Vec::new()),
            queried: Mutex::new(Vec::new()),
        }
    }

    pub fn on(self, server: [u8; 4], reply: Reply) -> Self {
        self.on_sequence(server, vec![reply])
    }

    pub fn on_sequence(self, server: [u8; 4], replies: Vec<Reply>) -> Self {
        self.scripts
            .lock()
            .unwrap()
            .insert(Ipv4Addr::from(server), replies);
        self
    }

    pub fn failing_first(self, replies: Vec<Reply>) -> Self {
        *self.leading.lock().unwrap() = replies;
        self
    }

    pub fn queried(&self) -> Vec<Ipv4Addr> {
        self.queried.lock().unwrap().clone()
    }

    pub fn query_count(&self) -> usize {
        self.queried.lock().unwrap().len()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NameserverTransport for MockTransport {
    async fn query(
        &self,
        _name: &DomainName,
        _record_type: RecordType,
        server: Ipv4Addr,
    ) -> Result<Message, DomainError> {
        self.queried.lock().unwrap().push(server);

        {
            let mut leading = self.leading.lock().unwrap();
            if !leading.is_empty() {
                return match leading.remove(0) {
                    Reply::Respond(message) => Ok(message),
                    Reply::Fail(error) => Err(error),
                };
            }
        }

        let mut scripts = self.scripts.lock().unwrap();
        let reply = match scripts.get_mut(&server) {
            Some(replies) if replies.len() > 1 => replies.remove(0),
            Some(replies) if !replies.is_empty() => replies[0].clone(),
            _ => timeout(server),
        };

        match reply {
            Reply::Respond(message) => Ok(message),
            Reply::Fail(error) => Err(error),
        }
    }
}

/// Host lookups answered from a fixed table; every call is recorded.
pub struct MockHostResolver {
    hosts: HashMap<DomainName, Vec<IpAddr>>,
    calls: Mutex<Vec<DomainName>>,
}

impl MockHostResolver {
    pub fn new() -> Self {
        Self {
            hosts: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_host(mut self, host: &str, addresses: &[&str]) -> Self {
        self.hosts.insert(
            host.parse().unwrap(),
            addresses.iter().map(|ip| ip.parse().unwrap()).collect(),
        );
        self
    }

    pub fn calls(&self) -> Vec<DomainName> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockHostResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostResolver for MockHostResolver {
    async fn resolve_host(&self, host: &DomainName) -> Result<Vec<IpAddr>, DomainError> {
        self.calls.lock().unwrap().push(host.clone());
        self.hosts
            .get(host)
            .cloned()
            .ok_or_else(|| DomainError::HostLookup {
                host: host.to_string(),
                reason: "no such host".to_string(),
            })
    }
}
