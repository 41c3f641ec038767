mod host_resolver;
mod nameserver_transport;
mod retry_policy;

pub use host_resolver::HostResolver;
pub use nameserver_transport::NameserverTransport;
pub use retry_policy::{RetryDecision, RetryPolicy};

// Re-export for convenience
pub use rootwalk_domain::{DomainName, Message, NameServer};
