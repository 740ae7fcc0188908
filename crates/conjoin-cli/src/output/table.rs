//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};

/// Valid tables found for one locale in a pattern file.
pub struct LocaleSummary {
    /// Locale tag (e.g., "es", "pt-BR").
    pub locale: String,
    /// Keys whose patterns are all valid.
    pub keys: Vec<String>,
    /// Number of problems reported for this locale.
    pub problems: usize,
}

/// Format pattern file contents as a table.
pub fn format_locale_table(summaries: &[LocaleSummary]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Locale", "Keys", "Problems"]);

    for summary in summaries {
        table.add_row(vec![
            summary.locale.clone(),
            summary.keys.join(", "),
            summary.problems.to_string(),
        ]);
    }

    table
}

/// One row of the type/style to pattern key mapping.
pub struct KeyRow {
    pub list_type: String,
    pub style: String,
    pub key: String,
}

/// Format the pattern key mapping as a table.
pub fn format_key_table(rows: &[KeyRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Type", "Style", "Key"]);

    for row in rows {
        table.add_row(vec![row.list_type.clone(), row.style.clone(), row.key.clone()]);
    }

    table
}
