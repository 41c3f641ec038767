use rootwalk_domain::NameServer;
use std::collections::HashSet;
use std::net::Ipv4Addr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryDecision {
    /// Start the walk over from this server, dropping the referral depth reached so far.
    RestartFrom(NameServer),

    /// Ask this server next without leaving the current level.
    RetryAt(NameServer),

    /// Nothing left to try.
    Exhausted,
}

/// What to do after a server failed to answer.
///
/// `tried` holds the address of every server contacted during the lookup,
/// the failed one included.
pub trait RetryPolicy: Send + Sync {
    fn on_failure(&self, failed: &NameServer, tried: &HashSet<Ipv4Addr>) -> RetryDecision;
}
