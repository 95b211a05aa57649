//! Error handling and display for the CLI.

use colored::Colorize;
use idkit_id_list::IdListError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unknown output format '{0}'. Use 'table' or 'json'.")]
    InvalidFormat(String),

    #[error("Invalid ID list '{input}': {source}")]
    InvalidList {
        input: String,
        #[source]
        source: IdListError,
    },

    #[error("{invalid} of {total} IDs are invalid")]
    InvalidIds { invalid: usize, total: usize },

    #[error("Cannot generate {requested} IDs (limit is {max})")]
    TooManyRequested { requested: usize, max: usize },
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    // Check for specific error types and provide hints
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        if let Some(hint) = hint(cli_err) {
            eprintln!("\n{}", format!("Hint: {hint}").yellow());
        }
    }
}

fn hint(err: &CliError) -> Option<&'static str> {
    match err {
        CliError::InvalidList {
            source: IdListError::DuplicateIds { .. },
            ..
        } => Some("Each ID may appear only once in a list."),
        CliError::InvalidList {
            source: IdListError::InvalidId(_),
            ..
        }
        | CliError::InvalidIds { .. } => Some(
            "IDs use the lowercase hyphenated UUID form, e.g. f41e0af4-88c4-4d79-9c1a-6e8ea34a956f.",
        ),
        CliError::TooManyRequested { .. } => Some("Raise the limit with IDCTL_MAX_GENERATE."),
        _ => None,
    }
}
