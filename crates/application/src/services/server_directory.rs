use rootwalk_domain::NameServer;
use std::collections::HashSet;
use std::net::Ipv4Addr;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// The bootstrap server table.
///
/// The table never changes after construction and can be shared between
/// lookups; only the random source used by [`ServerDirectory::bootstrap`]
/// carries state.
pub struct ServerDirectory {
    servers: Arc<[NameServer]>,
    rng: Mutex<fastrand::Rng>,
}

impl ServerDirectory {
    /// Entries without an address are dropped, they could never be queried.
    pub fn new(servers: Vec<NameServer>) -> Self {
        Self::with_rng(servers, fastrand::Rng::new())
    }

    pub fn with_seed(servers: Vec<NameServer>, seed: u64) -> Self {
        Self::with_rng(servers, fastrand::Rng::with_seed(seed))
    }

    pub fn with_rng(servers: Vec<NameServer>, rng: fastrand::Rng) -> Self {
        let servers: Arc<[NameServer]> = servers
            .into_iter()
            .filter(NameServer::has_address)
            .collect();
        Self {
            servers,
            rng: Mutex::new(rng),
        }
    }

    pub fn servers(&self) -> &[NameServer] {
        &self.servers
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    /// A uniformly chosen member of the table to start a lookup from.
    pub fn bootstrap(&self) -> Option<NameServer> {
        if self.servers.is_empty() {
            return None;
        }
        let index = match self.rng.lock() {
            Ok(mut rng) => rng.usize(..self.servers.len()),
            Err(poisoned) => poisoned.into_inner().usize(..self.servers.len()),
        };
        let chosen = self.servers[index].clone();
        debug!(server = %chosen, "Picked bootstrap server");
        Some(chosen)
    }

    /// Any member whose address is not in `tried`.
    pub fn next_untried(&self, tried: &HashSet<Ipv4Addr>) -> Option<NameServer> {
        self.servers
            .iter()
            .find(|server| server.address.is_some_and(|ip| !tried.contains(&ip)))
            .cloned()
    }
}
