//! Output formatting for CLI commands.

use std::str::FromStr;

use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled};

use crate::error::CliError;
use crate::ids::CliIdList;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(CliError::InvalidFormat(other.to_string())),
        }
    }
}

/// One row of a printed ID list.
#[derive(Debug, Serialize, Tabled)]
pub struct IdRow {
    pub position: usize,
    pub id: String,
}

impl IdRow {
    pub fn rows(list: &CliIdList) -> Vec<Self> {
        list.iter()
            .enumerate()
            .map(|(position, id)| Self {
                position,
                id: id.to_string(),
            })
            .collect()
    }
}

/// Print data in the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                println!("{}", "No items found.".dimmed());
            } else {
                let table = Table::new(data).to_string();
                println!("{}", table);
            }
        }
        OutputFormat::Json => {
            let json = format_json(data, "[]");
            println!("{}", json);
        }
    }
}

/// Print an ID list: a position/id table, or a JSON array of ID strings.
pub fn print_list(list: &CliIdList, format: OutputFormat) {
    match format {
        OutputFormat::Table => print_output(&IdRow::rows(list), format),
        OutputFormat::Json => println!("{}", format_json(list, "[]")),
    }
}

/// Print a named boolean result.
pub fn print_check(name: &str, value: bool, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            let shown = if value {
                "true".green().bold()
            } else {
                "false".red().bold()
            };
            println!("{}: {}", name, shown);
        }
        OutputFormat::Json => {
            let mut result = serde_json::Map::new();
            result.insert(name.to_string(), serde_json::json!(value));
            println!("{}", serde_json::Value::Object(result));
        }
    }
}

fn format_json<T: Serialize + ?Sized>(data: &T, fallback: &str) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use idkit_id::{Identifier, Uuid};

    use super::*;
    use crate::ids::CliId;

    #[test]
    fn test_format_parse() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!(matches!(
            "xml".parse::<OutputFormat>(),
            Err(CliError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rows_follow_list_order() {
        let ids = [
            CliId::from_uuid(Uuid::from_u128(2)),
            CliId::from_uuid(Uuid::from_u128(1)),
        ];
        let list = CliIdList::from_ids(ids).unwrap();
        let rows = IdRow::rows(&list);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].position, 0);
        assert_eq!(rows[0].id, ids[0].to_string());
        assert_eq!(rows[1].id, ids[1].to_string());
    }

    #[test]
    fn test_list_json_is_string_array() {
        let list = CliIdList::from_ids([CliId::generate()]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&format_json(&list, "[]")).unwrap();
        assert_eq!(json, serde_json::json!(list.ids_as_string_list()));
    }
}
