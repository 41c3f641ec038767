use serde::{Deserialize, Serialize};

use super::errors::ConfigError;

const LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set. Either a bare level or
    /// `target=level` directives separated by commas.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl LoggingConfig {
    /// Bare words must name a level; directives with a target are left to
    /// the subscriber.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.level.trim();
        if level.is_empty() {
            return Err(ConfigError::Validation("Log level cannot be empty".to_string()));
        }
        let bare = level.split(',').filter(|d| !d.contains('='));
        for word in bare {
            if !LEVELS.contains(&word.trim().to_ascii_lowercase().as_str()) {
                return Err(ConfigError::Validation(format!(
                    "Unknown log level '{}'",
                    word.trim()
                )));
            }
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
