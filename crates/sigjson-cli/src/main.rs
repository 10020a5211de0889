//! sigjson CLI - JSON request loop for a messaging client
//!
//! Commands:
//! - `sigjson json` - Read requests from stdin, write replies to stdout
//! - `sigjson check-config` - Validate a configuration file

use clap::{Parser, Subcommand};
use sigjson_core::LogLevel;
use std::path::PathBuf;

mod command;
mod dispatch;
mod dry_run;
mod event_loop;
mod settings;

#[derive(Parser)]
#[command(name = "sigjson")]
#[command(author, version, about = "JSON request/reply interface for a messaging client", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the configured log level (trace, debug, info, warn, error, off)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read newline-delimited JSON requests from stdin and reply on stdout
    Json,

    /// Validate the configuration and print the effective settings
    CheckConfig,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    sigjson_logging::init_logging(LogLevel::Info);
    let config = settings::load(cli.config.as_deref(), cli.log_level.as_deref())?;

    match cli.command {
        Commands::Json => {
            settings::apply_log_level(&config)?;
            event_loop::run_stdio(&config)?;
        }
        Commands::CheckConfig => {
            settings::check(cli.config.as_deref(), &config);
        }
    }

    Ok(())
}
