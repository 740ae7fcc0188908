//! Implementation of the `conjoin keys` command.

use conjoin::{resolve_pattern_key, ListType, Style};
use miette::IntoDiagnostic;
use serde::Serialize;

use crate::output::table::{format_key_table, KeyRow};

/// Arguments for the keys command.
#[derive(Debug, clap::Args)]
pub struct KeysArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one mapping entry.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct KeyJson {
    #[serde(rename = "type")]
    list_type: ListType,
    style: Style,
    key: String,
}

/// Every (type, style) pair with the key it resolves to.
fn key_rows() -> miette::Result<Vec<KeyJson>> {
    let mut rows = Vec::new();
    for list_type in ListType::ALL {
        for style in Style::ALL {
            let key = resolve_pattern_key(list_type, Some(style)).into_diagnostic()?;
            rows.push(KeyJson {
                list_type,
                style,
                key: key.to_string(),
            });
        }
    }
    Ok(rows)
}

/// Run the keys command.
pub fn run_keys(args: KeysArgs) -> miette::Result<i32> {
    let rows = key_rows()?;
    if args.json {
        let json_output = serde_json::to_string_pretty(&rows).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        let table_rows: Vec<KeyRow> = rows
            .iter()
            .map(|row| KeyRow {
                list_type: row.list_type.to_string(),
                style: row.style.to_string(),
                key: row.key.clone(),
            })
            .collect();
        println!("{}", format_key_table(&table_rows));
    }
    Ok(exitcode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_every_type_and_style() {
        let rows = key_rows().unwrap();
        assert_eq!(rows.len(), 9);
        let unit_narrow = rows
            .iter()
            .find(|row| row.list_type == ListType::Unit && row.style == Style::Narrow)
            .unwrap();
        assert_eq!(unit_narrow.key, "unit-narrow");
        assert!(rows
            .iter()
            .filter(|row| row.list_type == ListType::Conjunction)
            .all(|row| row.key == "standard"));
    }
}
