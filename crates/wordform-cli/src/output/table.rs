//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};

/// One inflected word.
pub struct InflectionRow {
    pub input: String,
    pub output: String,
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

/// Format inflection results as a two-column table.
pub fn format_inflection_table(rows: &[InflectionRow]) -> Table {
    let mut table = new_table(vec!["Input", "Output"]);
    for row in rows {
        table.add_row(vec![row.input.clone(), row.output.clone()]);
    }
    table
}

/// Format numbered rule entries, one column per field.
pub fn format_rule_table(header: Vec<&str>, rows: &[Vec<String>]) -> Table {
    let mut columns = vec!["#"];
    columns.extend(header);
    let mut table = new_table(columns);
    for (index, row) in rows.iter().enumerate() {
        let mut cells = vec![(index + 1).to_string()];
        cells.extend(row.iter().cloned());
        table.add_row(cells);
    }
    table
}
