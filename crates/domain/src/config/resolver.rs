use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Deadline applied separately to sending and to receiving, in seconds
    #[serde(default = "default_query_timeout")]
    pub query_timeout_secs: u64,

    /// Destination port for every nameserver query
    #[serde(default = "default_port")]
    pub port: u16,

    /// Receive buffer size; larger responses are cut off
    #[serde(default = "default_max_udp_payload")]
    pub max_udp_payload: usize,

    /// Referrals one walk may follow before the lookup gives up
    #[serde(default = "default_max_referral_depth")]
    pub max_referral_depth: usize,

    /// Send every query with this id instead of a random one
    #[serde(default)]
    pub fixed_transaction_id: Option<u16>,

    /// Seed for the bootstrap server pick; random when unset
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl ResolverConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            query_timeout_secs: default_query_timeout(),
            port: default_port(),
            max_udp_payload: default_max_udp_payload(),
            max_referral_depth: default_max_referral_depth(),
            fixed_transaction_id: None,
            rng_seed: None,
        }
    }
}

/// One bootstrap server, as written in the config file.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RootServerEntry {
    pub name: String,
    pub address: String,
}

fn default_query_timeout() -> u64 {
    3
}

fn default_port() -> u16 {
    53
}

fn default_max_udp_payload() -> usize {
    512
}

fn default_max_referral_depth() -> usize {
    16
}
