//! Runtime configuration

use crate::{BridgeError, BridgeResult, LogLevel};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the JSON request loop
///
/// Every field has a default, so an empty file (or no file at all) is a
/// valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BridgeConfig {
    /// Initial log level ("trace", "debug", "info", "warn", "error", "off")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Local account number, used for log context only
    #[serde(default)]
    pub account: Option<String>,

    /// Upper bound on the size of a single request line, in bytes
    #[serde(default = "default_max_request_bytes")]
    pub max_request_bytes: usize,

    /// Verify that attachment and avatar paths exist before acknowledging
    #[serde(default = "default_check_files")]
    pub check_files: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_request_bytes() -> usize {
    64 * 1024
}

fn default_check_files() -> bool {
    true
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            account: None,
            max_request_bytes: default_max_request_bytes(),
            check_files: default_check_files(),
        }
    }
}

impl BridgeConfig {
    /// Create a default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> BridgeResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> BridgeResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            BridgeError::ConfigError(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parsed log level
    pub fn level(&self) -> BridgeResult<LogLevel> {
        self.log_level.parse()
    }

    /// Check values that deserialize fine but make no sense
    pub fn validate(&self) -> BridgeResult<()> {
        self.level()?;

        if self.max_request_bytes == 0 {
            return Err(BridgeError::ConfigError(
                "max_request_bytes must be greater than zero".to_string(),
            ));
        }

        if let Some(account) = &self.account {
            if account.trim().is_empty() {
                return Err(BridgeError::ConfigError(
                    "account cannot be empty when set".to_string(),
                ));
            }
        }

        Ok(())
    }
}
