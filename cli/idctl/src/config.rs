//! idctl configuration (env-driven).

use std::num::NonZeroUsize;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::output::OutputFormat;

/// Default upper bound for `idctl generate --count`.
const DEFAULT_MAX_GENERATE: usize = 1000;

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("unknown log format '{other}'"),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Output format used when `--format` is not given.
    pub format: OutputFormat,

    /// Largest number of IDs a single `generate` may produce.
    pub max_generate: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let log_level = lookup("IDCTL_LOG_LEVEL").unwrap_or_else(|| "warn".to_string());

        let log_format = lookup("IDCTL_LOG_FORMAT")
            .map(|v| v.parse::<LogFormat>())
            .transpose()
            .context("IDCTL_LOG_FORMAT must be 'text' or 'json'.")?
            .unwrap_or_default();

        let format = lookup("IDCTL_FORMAT")
            .map(|v| v.parse::<OutputFormat>())
            .transpose()
            .context("IDCTL_FORMAT must be 'table' or 'json'.")?
            .unwrap_or_default();

        let max_generate = lookup("IDCTL_MAX_GENERATE")
            .map(|v| v.parse::<NonZeroUsize>())
            .transpose()
            .context("IDCTL_MAX_GENERATE must be a positive integer.")?
            .map_or(DEFAULT_MAX_GENERATE, NonZeroUsize::get);

        Ok(Self {
            log_level,
            log_format,
            format,
            max_generate,
        })
    }
}
