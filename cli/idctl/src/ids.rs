//! The ID kind handled by the CLI and list argument parsing.

use idkit_id::define_id;
use idkit_id_list::define_id_list;

use crate::error::CliError;

define_id!(CliId, "id");
define_id_list!(CliIdList, CliId);

/// Parses a comma-separated list argument.
///
/// Whitespace around entries is ignored and empty entries are skipped, so
/// `""` is the empty list.
pub fn parse_list(input: &str) -> Result<CliIdList, CliError> {
    let entries = input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty());

    CliIdList::from_strings(entries).map_err(|source| CliError::InvalidList {
        input: input.to_string(),
        source,
    })
}
