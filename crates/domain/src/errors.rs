use crate::config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Failed to open UDP socket to {server}: {reason}")]
    Dial { server: String, reason: String },

    #[error("Timeout talking to {server}")]
    Timeout { server: String },

    #[error("Malformed DNS message: {0}")]
    Protocol(String),

    #[error("Referral for {zone} carries no NS records")]
    EmptyReferral { zone: String },

    #[error("None of the nameservers for {zone} could be resolved to an address")]
    NameResolutionFailure { zone: String },

    #[error("All root servers failed after {attempts} attempts")]
    RootServersExhausted { attempts: usize },

    #[error("Referral chain exceeded {limit} steps")]
    ReferralLimitExceeded { limit: usize },

    #[error("Host lookup for {host} failed: {reason}")]
    HostLookup { host: String, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// Failures of a single exchange with a nameserver. These are the only
    /// kinds that make the resolver move on to another root server.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DomainError::Dial { .. } | DomainError::Timeout { .. } | DomainError::Protocol(_)
        )
    }

    /// Short status label used in the final report.
    pub fn status(&self) -> &'static str {
        match self {
            DomainError::InvalidDomainName(_) => "INVALID_NAME",
            DomainError::Dial { .. } => "DIAL_ERROR",
            DomainError::Timeout { .. } => "TIMEOUT",
            DomainError::Protocol(_) => "PROTOCOL_ERROR",
            DomainError::EmptyReferral { .. } => "EMPTY_REFERRAL",
            DomainError::NameResolutionFailure { .. } => "NS_UNRESOLVABLE",
            DomainError::RootServersExhausted { .. } => "ROOTS_EXHAUSTED",
            DomainError::ReferralLimitExceeded { .. } => "REFERRAL_LIMIT",
            DomainError::HostLookup { .. } => "HOST_LOOKUP",
            DomainError::ConfigError(_) => "CONFIG",
        }
    }
}

impl From<ConfigError> for DomainError {
    fn from(err: ConfigError) -> Self {
        DomainError::ConfigError(err.to_string())
    }
}
