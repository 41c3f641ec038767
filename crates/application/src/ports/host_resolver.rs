use async_trait::async_trait;
use rootwalk_domain::{DomainError, DomainName};
use std::net::IpAddr;

/// Address lookup through whatever resolver the host system provides.
/// Used for nameservers a referral names without glue.
#[async_trait]
pub trait HostResolver: Send + Sync {
    async fn resolve_host(&self, host: &DomainName) -> Result<Vec<IpAddr>, DomainError>;
}
