//! List algebra commands (merge, diff, intersect, equal, order).

use anyhow::Result;
use clap::Args;

use crate::ids::{parse_list, CliIdList};
use crate::output::{print_check, print_list};

use super::CommandContext;

/// Merge lists, keeping the first occurrence of repeated IDs.
#[derive(Debug, Args)]
pub struct MergeCommand {
    /// Lists to merge, in order.
    #[arg(required = true)]
    lists: Vec<String>,
}

impl MergeCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let merged = merge(&self.lists)?;
        print_list(&merged, ctx.format);
        Ok(())
    }
}

/// Two lists to combine or compare.
#[derive(Debug, Args)]
pub struct PairCommand {
    /// First list.
    left: String,

    /// Second list.
    right: String,
}

impl PairCommand {
    fn parse(&self) -> Result<(CliIdList, CliIdList)> {
        Ok((parse_list(&self.left)?, parse_list(&self.right)?))
    }

    pub fn run_diff(self, ctx: &CommandContext) -> Result<()> {
        let (left, right) = self.parse()?;
        print_list(&left.diff(&right), ctx.format);
        Ok(())
    }

    pub fn run_intersect(self, ctx: &CommandContext) -> Result<()> {
        let (left, right) = self.parse()?;
        print_list(&left.intersect(&right), ctx.format);
        Ok(())
    }

    pub fn run_equal(self, ctx: &CommandContext) -> Result<()> {
        let (left, right) = self.parse()?;
        print_check("equal", left.is_equal_to(&right), ctx.format);
        Ok(())
    }
}

/// Whether a list follows the order of a reference list.
#[derive(Debug, Args)]
pub struct OrderCommand {
    /// List to check.
    list: String,

    /// Reference list giving the expected order.
    #[arg(long)]
    reference: String,
}

impl OrderCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let list = parse_list(&self.list)?;
        let reference = parse_list(&self.reference)?;
        print_check("in_order", list.is_in_same_order(&reference), ctx.format);
        Ok(())
    }
}

fn merge(inputs: &[String]) -> Result<CliIdList> {
    let lists = inputs
        .iter()
        .map(|input| parse_list(input))
        .collect::<Result<Vec<_>, _>>()?;

    let merged = CliIdList::from_id_lists(&lists);
    tracing::debug!(
        inputs = lists.len(),
        count = merged.count(),
        "merged ID lists"
    );
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use idkit_id::Uuid;

    use super::*;
    use crate::ids::CliId;

    fn id(n: u128) -> CliId {
        CliId::from_uuid(Uuid::from_u128(n))
    }

    fn joined(ns: &[u128]) -> String {
        ns.iter()
            .map(|n| id(*n).to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    #[test]
    fn test_merge_dedups_across_lists() {
        let merged = merge(&[joined(&[1, 2]), joined(&[2, 3]), String::new()]).unwrap();
        assert_eq!(merged.as_slice(), &[id(1), id(2), id(3)]);
    }

    #[test]
    fn test_merge_reports_bad_list() {
        assert!(merge(&[joined(&[1]), "bogus".to_string()]).is_err());
    }

    #[test]
    fn test_pair_parse() {
        let pair = PairCommand {
            left: joined(&[1, 2, 3, 4]),
            right: joined(&[1, 3]),
        };
        let (left, right) = pair.parse().unwrap();
        assert_eq!(left.diff(&right).as_slice(), &[id(2), id(4)]);
        assert_eq!(left.intersect(&right).as_slice(), &[id(1), id(3)]);
    }
}
