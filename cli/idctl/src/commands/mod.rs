//! CLI commands.

mod generate;
mod lists;
mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::output::OutputFormat;

/// idctl - Generate, validate, and combine ID lists.
///
/// Lists are passed as comma-separated IDs, e.g. `id1,id2,id3`.
#[derive(Debug, Parser)]
#[command(name = "idctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json). Defaults to IDCTL_FORMAT, then table.
    #[arg(long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate fresh random IDs.
    Generate(generate::GenerateCommand),

    /// Check that IDs are in canonical form.
    Validate(validate::ValidateCommand),

    /// Merge lists, keeping the first occurrence of repeated IDs.
    Merge(lists::MergeCommand),

    /// IDs present in exactly one of two lists.
    Diff(lists::PairCommand),

    /// IDs present in both lists, in the order of the first.
    Intersect(lists::PairCommand),

    /// Whether two lists hold the same IDs, ignoring order.
    Equal(lists::PairCommand),

    /// Whether a list follows the order of a reference list.
    Order(lists::OrderCommand),
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self, config: Config) -> Result<()> {
        let format = match self.format.as_deref() {
            Some(value) => value.parse::<OutputFormat>()?,
            None => config.format,
        };

        let ctx = CommandContext { config, format };

        match self.command {
            Commands::Generate(cmd) => cmd.run(&ctx),
            Commands::Validate(cmd) => cmd.run(&ctx),
            Commands::Merge(cmd) => cmd.run(&ctx),
            Commands::Diff(cmd) => cmd.run_diff(&ctx),
            Commands::Intersect(cmd) => cmd.run_intersect(&ctx),
            Commands::Equal(cmd) => cmd.run_equal(&ctx),
            Commands::Order(cmd) => cmd.run(&ctx),
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
}
