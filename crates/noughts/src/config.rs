//! Application configuration loaded from TOML.

use std::path::{Path, PathBuf};
use std::time::Duration;

use derive_getters::Getters;
use noughts_engine::RoundPolicy;
use serde::Deserialize;
use tracing::{debug, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "noughts.toml";

/// Errors loading configuration.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[display("Failed to read config {}: {}", path.display(), source)]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid TOML for [`AppConfig`].
    #[display("Invalid config: {}", source)]
    Parse {
        /// Underlying parse error.
        source: toml::de::Error,
    },
}

/// User-configurable settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// What happens after a round ends.
    round_policy: RoundPolicy,
    /// Pause before the computer's move is shown.
    computer_delay_ms: u64,
    /// Pause on the finished board before the next round.
    round_pause_ms: u64,
    /// Log file used while the terminal UI owns the screen.
    log_file: PathBuf,
    /// Default tracing filter when `RUST_LOG` is unset.
    log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            round_policy: RoundPolicy::KeepSettings,
            computer_delay_ms: 500,
            round_pause_ms: 2000,
            log_file: PathBuf::from("noughts.log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
    /// read if present and defaults are used otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_PATH);
                if !default.exists() {
                    debug!("No config file, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };

        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_toml(&text)?;
        debug!(path = %path.display(), ?config, "Loaded config");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed input or unknown keys.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse { source })
    }

    /// Replaces the round policy.
    pub fn with_round_policy(mut self, round_policy: RoundPolicy) -> Self {
        self.round_policy = round_policy;
        self
    }

    /// Pause before the computer's move.
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }

    /// Pause before the next round.
    pub fn round_pause(&self) -> Duration {
        Duration::from_millis(self.round_pause_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config = AppConfig::from_toml(
            "round_policy = \"reconfigure\"\ncomputer_delay_ms = 0\n",
        )
        .unwrap();
        assert_eq!(*config.round_policy(), RoundPolicy::Reconfigure);
        assert_eq!(config.computer_delay(), Duration::ZERO);
        assert_eq!(config.round_pause(), Duration::from_millis(2000));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = AppConfig::from_toml("board_size = 4\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
