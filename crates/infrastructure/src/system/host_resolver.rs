use async_trait::async_trait;
use rootwalk_application::ports::HostResolver;
use rootwalk_domain::{DomainError, DomainName};
use std::net::IpAddr;
use std::time::Duration;
use tracing::debug;

/// Looks nameserver host names up through the operating system resolver
/// (`getaddrinfo` via tokio), not through the iterative walk.
pub struct SystemHostResolver {
    timeout: Duration,
}

impl SystemHostResolver {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl HostResolver for SystemHostResolver {
    async fn resolve_host(&self, host: &DomainName) -> Result<Vec<IpAddr>, DomainError> {
        let target = host.to_host_string();

        debug!(host = %host, "Performing system host lookup");

        let addrs_iter =
            tokio::time::timeout(self.timeout, tokio::net::lookup_host((target.as_str(), 0)))
                .await
                .map_err(|_| DomainError::HostLookup {
                    host: host.to_string(),
                    reason: format!("timed out after {:?}", self.timeout),
                })?
                .map_err(|e| DomainError::HostLookup {
                    host: host.to_string(),
                    reason: e.to_string(),
                })?;

        let mut addresses: Vec<IpAddr> = Vec::new();
        for addr in addrs_iter {
            if !addresses.contains(&addr.ip()) {
                addresses.push(addr.ip());
            }
        }

        if addresses.is_empty() {
            return Err(DomainError::HostLookup {
                host: host.to_string(),
                reason: "no addresses found".to_string(),
            });
        }

        debug!(host = %host, count = addresses.len(), "System host lookup finished");
        Ok(addresses)
    }
}
