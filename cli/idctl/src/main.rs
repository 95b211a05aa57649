//! idctl - CLI for idkit ID lists
//!
//! Generates and validates IDs and runs the list algebra (merge, diff,
//! intersect, equality, order checks) over comma-separated ID lists.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod ids;
mod output;

use commands::Cli;
use config::{Config, LogFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error::print_error(&e);
            std::process::exit(1);
        }
    };

    // Initialize tracing (prefer RUST_LOG, fallback to IDCTL_LOG_LEVEL)
    let json_logs = config.log_format == LogFormat::Json;
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_level.clone().into()))
        .with(json_logs.then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json_logs).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();

    tracing::debug!(
        log_level = %config.log_level,
        log_format = ?config.log_format,
        format = ?config.format,
        max_generate = config.max_generate,
        "Configuration loaded"
    );

    if let Err(e) = cli.run(config) {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
