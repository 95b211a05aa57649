//! Validate command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliError;
use crate::ids::CliId;
use crate::output::print_output;

use super::CommandContext;

/// Check that IDs are in canonical form.
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// IDs to check.
    #[arg(required = true)]
    ids: Vec<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct ValidationRow {
    input: String,
    valid: bool,
    error: String,
}

impl ValidateCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let rows = validate(&self.ids);
        print_output(&rows, ctx.format);

        let invalid = rows.iter().filter(|row| !row.valid).count();
        if invalid > 0 {
            return Err(CliError::InvalidIds {
                invalid,
                total: rows.len(),
            }
            .into());
        }
        Ok(())
    }
}

fn validate(inputs: &[String]) -> Vec<ValidationRow> {
    inputs
        .iter()
        .map(|input| match CliId::parse(input) {
            Ok(_) => ValidationRow {
                input: input.clone(),
                valid: true,
                error: String::new(),
            },
            Err(e) => {
                tracing::debug!(input = %input, error = %e, "invalid ID");
                ValidationRow {
                    input: input.clone(),
                    valid: false,
                    error: e.to_string(),
                }
            }
        })
        .collect()
}
