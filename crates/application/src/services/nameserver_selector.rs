use crate::ports::HostResolver;
use rootwalk_domain::NameServer;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Picks the nameserver to follow a referral to.
pub struct NameserverSelector {
    host_resolver: Arc<dyn HostResolver>,
}

impl NameserverSelector {
    pub fn new(host_resolver: Arc<dyn HostResolver>) -> Self {
        Self { host_resolver }
    }

    /// Returns the first candidate with glue, untouched. Otherwise looks the
    /// candidates up in order and returns the first one that resolves to an
    /// IPv4 address, paired with that address.
    pub async fn resolve_any(&self, candidates: &[NameServer]) -> Option<NameServer> {
        if let Some(glued) = candidates.iter().find(|ns| ns.has_address()) {
            debug!(nameserver = %glued, "Using glue address");
            return Some(glued.clone());
        }

        for candidate in candidates {
            match self.host_resolver.resolve_host(&candidate.name).await {
                Ok(addresses) => {
                    let ipv4 = addresses.iter().find_map(|ip| match ip {
                        IpAddr::V4(v4) => Some(*v4),
                        IpAddr::V6(_) => None,
                    });
                    match ipv4 {
                        Some(ip) => {
                            info!("Resolved DNS server name {} to IP {}", candidate.name, ip);
                            return Some(candidate.with_address(ip));
                        }
                        None => {
                            debug!(nameserver = %candidate.name, found = addresses.len(), "No IPv4 address");
                        }
                    }
                }
                Err(e) => {
                    warn!(nameserver = %candidate.name, error = %e, "Nameserver lookup failed");
                }
            }
        }

        None
    }
}
