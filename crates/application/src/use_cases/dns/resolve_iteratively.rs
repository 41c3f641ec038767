use crate::ports::{HostResolver, NameserverTransport, RetryDecision, RetryPolicy};
use crate::services::{NameserverSelector, RootFallbackPolicy, ServerDirectory};
use rootwalk_domain::{
    extract_referral, DomainError, DomainName, Message, NameServer, RecordType, Resolution,
};
use std::collections::HashSet;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const DEFAULT_MAX_REFERRAL_DEPTH: usize = 16;

enum LookupState {
    Querying(NameServer),
    Referral(Message),
    Authoritative(Resolution),
    Exhausted(DomainError),
}

/// Per-lookup bookkeeping. Dropped when the lookup ends.
struct ResolutionState<'a> {
    domain: &'a DomainName,
    record_type: RecordType,
    tried: HashSet<Ipv4Addr>,
    depth: usize,
    queries_sent: usize,
    failures: usize,
}

/// Walks the delegation chain from a root server down to an authoritative
/// answer, one query at a time.
pub struct ResolveIterativelyUseCase {
    transport: Arc<dyn NameserverTransport>,
    directory: Arc<ServerDirectory>,
    selector: NameserverSelector,
    retry_policy: Arc<dyn RetryPolicy>,
    max_referral_depth: usize,
}

impl ResolveIterativelyUseCase {
    pub fn new(
        transport: Arc<dyn NameserverTransport>,
        directory: Arc<ServerDirectory>,
        host_resolver: Arc<dyn HostResolver>,
    ) -> Self {
        let retry_policy = Arc::new(RootFallbackPolicy::new(Arc::clone(&directory)));
        Self {
            transport,
            directory,
            selector: NameserverSelector::new(host_resolver),
            retry_policy,
            max_referral_depth: DEFAULT_MAX_REFERRAL_DEPTH,
        }
    }

    pub fn with_retry_policy(mut self, retry_policy: Arc<dyn RetryPolicy>) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    pub fn with_max_referral_depth(mut self, max_referral_depth: usize) -> Self {
        self.max_referral_depth = max_referral_depth;
        self
    }

    pub async fn execute(
        &self,
        domain: &DomainName,
        record_type: RecordType,
    ) -> Result<Resolution, DomainError> {
        let start = self
            .directory
            .bootstrap()
            .ok_or(DomainError::RootServersExhausted { attempts: 0 })?;

        info!("Starting iterative lookup for {} ({})", domain, record_type);

        let mut state = ResolutionState {
            domain,
            record_type,
            tried: HashSet::new(),
            depth: 0,
            queries_sent: 0,
            failures: 0,
        };
        let mut lookup = LookupState::Querying(start);

        loop {
            lookup = match lookup {
                LookupState::Querying(server) => self.query(&mut state, server).await,
                LookupState::Referral(message) => self.follow_referral(&mut state, &message).await,
                LookupState::Authoritative(resolution) => return Ok(resolution),
                LookupState::Exhausted(error) => {
                    warn!(
                        domain = %domain,
                        queries = state.queries_sent,
                        status = error.status(),
                        "Lookup failed: {}",
                        error
                    );
                    return Err(error);
                }
            };
        }
    }

    async fn query(&self, state: &mut ResolutionState<'_>, server: NameServer) -> LookupState {
        let Some(address) = server.address else {
            return LookupState::Exhausted(DomainError::NameResolutionFailure {
                zone: server.name.to_string(),
            });
        };

        info!("Sending request to {}", server);
        state.tried.insert(address);
        state.queries_sent += 1;

        match self
            .transport
            .query(state.domain, state.record_type, address)
            .await
        {
            Ok(message) if message.is_authoritative() => {
                LookupState::Authoritative(self.authoritative_answer(state, server, &message))
            }
            Ok(message) => LookupState::Referral(message),
            Err(error) if error.is_transport_error() => {
                warn!(server = %server, "Error: {}", error);
                state.failures += 1;
                self.fall_back(state, &server)
            }
            Err(error) => LookupState::Exhausted(error),
        }
    }

    fn fall_back(&self, state: &mut ResolutionState<'_>, failed: &NameServer) -> LookupState {
        match self.retry_policy.on_failure(failed, &state.tried) {
            RetryDecision::RestartFrom(root) => {
                info!("Retrying with a new root server: {}", root);
                state.depth = 0;
                LookupState::Querying(root)
            }
            RetryDecision::RetryAt(next) => {
                info!("Retrying with {}", next);
                LookupState::Querying(next)
            }
            RetryDecision::Exhausted => {
                info!("No more root servers available. Stopping.");
                LookupState::Exhausted(DomainError::RootServersExhausted {
                    attempts: state.failures,
                })
            }
        }
    }

    async fn follow_referral(
        &self,
        state: &mut ResolutionState<'_>,
        message: &Message,
    ) -> LookupState {
        let referral = extract_referral(message);

        if referral.is_empty() {
            info!("No more name servers found, stopping.");
            return LookupState::Exhausted(DomainError::EmptyReferral {
                zone: state.domain.to_string(),
            });
        }

        info!(
            "Received referral response - DNS servers for domain: {}",
            referral.zone_display()
        );
        for nameserver in &referral.nameservers {
            info!("-> {}", nameserver);
        }

        state.depth += 1;
        if state.depth > self.max_referral_depth {
            return LookupState::Exhausted(DomainError::ReferralLimitExceeded {
                limit: self.max_referral_depth,
            });
        }

        match self.selector.resolve_any(&referral.nameservers).await {
            Some(next) => {
                debug!(next = %next, depth = state.depth, "Following referral");
                LookupState::Querying(next)
            }
            None => {
                info!("Failed to resolve next NS IP, stopping.");
                LookupState::Exhausted(DomainError::NameResolutionFailure {
                    zone: referral.zone_display(),
                })
            }
        }
    }

    fn authoritative_answer(
        &self,
        state: &ResolutionState<'_>,
        server: NameServer,
        message: &Message,
    ) -> Resolution {
        info!("Received authoritative (AA) response from {}", server);

        let addresses = message.answer_addresses();
        for address in &addresses {
            let kind = match address {
                IpAddr::V4(_) => "A",
                IpAddr::V6(_) => "AAAA",
            };
            info!("-> Answer: {}-record for {} = {}", kind, state.domain, address);
        }

        let cname = message.cname_for(state.domain).cloned();
        if let Some(target) = &cname {
            info!("-> Answer: CNAME for {} = {}", state.domain, target);
        }

        Resolution {
            domain: state.domain.clone(),
            record_type: state.record_type,
            addresses,
            cname,
            server,
            queries_sent: state.queries_sent,
        }
    }
}
