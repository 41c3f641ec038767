use crate::ports::{RetryDecision, RetryPolicy};
use crate::services::ServerDirectory;
use rootwalk_domain::NameServer;
use std::collections::HashSet;
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::debug;

/// Restarts the walk from a root server nobody has contacted yet, whatever
/// level the failure happened at.
pub struct RootFallbackPolicy {
    directory: Arc<ServerDirectory>,
}

impl RootFallbackPolicy {
    pub fn new(directory: Arc<ServerDirectory>) -> Self {
        Self { directory }
    }
}

impl RetryPolicy for RootFallbackPolicy {
    fn on_failure(&self, failed: &NameServer, tried: &HashSet<Ipv4Addr>) -> RetryDecision {
        match self.directory.next_untried(tried) {
            Some(root) => {
                debug!(failed = %failed, next = %root, tried = tried.len(), "Falling back to root");
                RetryDecision::RestartFrom(root)
            }
            None => RetryDecision::Exhausted,
        }
    }
}
