//! Configuration loading for the CLI

use anyhow::{Context, Result};
use sigjson_core::BridgeConfig;
use sigjson_logging::ReloadHandle;
use std::path::Path;

/// Load the configuration file (if any) and apply command-line overrides
pub fn load(path: Option<&Path>, log_level: Option<&str>) -> Result<BridgeConfig> {
    let mut config = match path {
        Some(path) => BridgeConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => BridgeConfig::default(),
    };

    if let Some(level) = log_level {
        config.log_level = level.to_string();
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Switch the running subscriber to the configured log level
///
/// Logging starts at INFO before the configuration is read, so that load
/// failures are reported; this narrows or widens it once the file is known.
pub fn apply_log_level(config: &BridgeConfig) -> Result<()> {
    let level = config.level()?;
    ReloadHandle::global()
        .reload_level(level)
        .with_context(|| format!("Failed to apply log level {level}"))?;
    tracing::debug!(%level, "log level applied");
    Ok(())
}

/// Check command implementation
pub fn check(path: Option<&Path>, config: &BridgeConfig) {
    match path {
        Some(path) => println!("Checking config: {}", path.display()),
        None => println!("No config file given, using defaults"),
    }

    println!("✓ Log level: {}", config.log_level);
    println!(
        "✓ Account: {}",
        config.account.as_deref().unwrap_or("(not set)")
    );
    println!("✓ Max request size: {} bytes", config.max_request_bytes);
    println!("✓ Check files: {}", config.check_files);
    println!("\nConfiguration is valid!");
}
