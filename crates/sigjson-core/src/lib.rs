//! sigjson-core - Core types, error codes, and configuration
//!
//! This crate provides the foundational types shared by the sigjson crates:
//! - [`BridgeError`] and [`ErrorCode`] for error handling
//! - [`BridgeConfig`] for runtime configuration
//! - [`LogLevel`] for diagnostic verbosity

mod config;
mod error;

pub use config::BridgeConfig;
pub use error::{BridgeError, BridgeResult, ErrorCode};

use std::str::FromStr;

/// Log levels for the diagnostic stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl FromStr for LogLevel {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" => Ok(LogLevel::Off),
            other => Err(BridgeError::ConfigError(format!(
                "unknown log level: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{BridgeConfig, BridgeError, BridgeResult, ErrorCode, LogLevel};
}
