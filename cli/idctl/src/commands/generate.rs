//! Generate command.

use anyhow::Result;
use clap::Args;
use idkit_id::Identifier;

use crate::error::CliError;
use crate::ids::{CliId, CliIdList};
use crate::output::print_list;

use super::CommandContext;

/// Generate fresh random IDs.
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Number of IDs to generate.
    #[arg(long, short = 'n', default_value_t = 1)]
    count: usize,
}

impl GenerateCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let list = generate(self.count, ctx.config.max_generate)?;
        tracing::debug!(count = list.count(), "generated IDs");
        print_list(&list, ctx.format);
        Ok(())
    }
}

fn generate(count: usize, max: usize) -> Result<CliIdList> {
    if count > max {
        return Err(CliError::TooManyRequested {
            requested: count,
            max,
        }
        .into());
    }

    let mut list = CliIdList::empty();
    while list.count() < count {
        list.add_id_when_not_in_list_in_place(CliId::generate());
    }
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_count() {
        let list = generate(5, 10).unwrap();
        assert_eq!(list.count(), 5);
    }

    #[test]
    fn test_generate_zero() {
        assert!(generate(0, 10).unwrap().is_empty());
    }

    #[test]
    fn test_generate_over_limit() {
        let err = generate(11, 10).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::TooManyRequested {
                requested: 11,
                max: 10
            })
        ));
    }
}
