use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use std::path::Path;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::{ResolverConfig, RootServerEntry};
use crate::{root_hints, DomainName, NameServer};

const LOCAL_CONFIG_PATH: &str = "rootwalk.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/rootwalk/config.toml";

/// Main configuration structure for Rootwalk
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Query behaviour (timeouts, port, limits)
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Bootstrap servers; the IANA root servers when empty
    #[serde(default)]
    pub root_servers: Vec<RootServerEntry>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. rootwalk.toml in current directory
    /// 3. /etc/rootwalk/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(Path::new(path))?
        } else if Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(Path::new(LOCAL_CONFIG_PATH))?
        } else if Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(Path::new(SYSTEM_CONFIG_PATH))?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(timeout) = overrides.query_timeout_secs {
            self.resolver.query_timeout_secs = timeout;
        }
        if let Some(port) = overrides.port {
            self.resolver.port = port;
        }
        if let Some(depth) = overrides.max_referral_depth {
            self.resolver.max_referral_depth = depth;
        }
        if let Some(seed) = overrides.rng_seed {
            self.resolver.rng_seed = Some(seed);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.query_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Query timeout cannot be 0".to_string(),
            ));
        }

        if self.resolver.port == 0 {
            return Err(ConfigError::Validation("Port cannot be 0".to_string()));
        }

        if self.resolver.max_udp_payload < 512 {
            return Err(ConfigError::Validation(format!(
                "UDP payload size {} is below the 512 byte minimum",
                self.resolver.max_udp_payload
            )));
        }

        self.logging.validate()?;
        self.root_servers()?;
        Ok(())
    }

    /// The bootstrap server table, parsed and ready to hand to the resolver.
    pub fn root_servers(&self) -> Result<Vec<NameServer>, ConfigError> {
        if self.root_servers.is_empty() {
            return Ok(root_hints::root_servers());
        }

        self.root_servers
            .iter()
            .map(|entry| {
                let name: DomainName = entry.name.parse().map_err(|e| {
                    ConfigError::Validation(format!("Root server name '{}': {}", entry.name, e))
                })?;
                let address: Ipv4Addr = entry.address.parse().map_err(|_| {
                    ConfigError::Validation(format!(
                        "Root server {} needs an IPv4 address, got '{}'",
                        entry.name, entry.address
                    ))
                })?;
                Ok(NameServer::new(name, address))
            })
            .collect()
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub query_timeout_secs: Option<u64>,
    pub port: Option<u16>,
    pub max_referral_depth: Option<usize>,
    pub rng_seed: Option<u64>,
    pub log_level: Option<String>,
}
