//! Output formatting for CLI commands.

use comfy_table::{Cell, Color, ContentArrangement, Table};
use serde::Serialize;

/// Output format selection.
#[derive(Clone, Copy)]
pub enum Format {
    Table,
    Json,
}

impl From<crate::OutputFormat> for Format {
    fn from(f: crate::OutputFormat) -> Self {
        match f {
            crate::OutputFormat::Table => Format::Table,
            crate::OutputFormat::Json => Format::Json,
        }
    }
}

/// Print a result struct as pretty JSON.
pub fn print_json<T: Serialize>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Create a styled table with consistent formatting.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.load_preset(comfy_table::presets::UTF8_FULL_CONDENSED);
    table
}

/// Add a header row to a table.
pub fn add_header(table: &mut Table, headers: &[&str]) {
    table.set_header(
        headers
            .iter()
            .map(|h| Cell::new(h).fg(Color::Cyan))
            .collect::<Vec<_>>(),
    );
}

/// Print a key-value table (for result summaries).
pub fn print_key_value_table(items: &[(&str, String)], format: Format, quiet: bool) {
    if quiet {
        return;
    }

    match format {
        Format::Json => {
            let map: std::collections::BTreeMap<&str, &str> =
                items.iter().map(|(k, v)| (*k, v.as_str())).collect();
            match serde_json::to_string_pretty(&map) {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("✗ {e}"),
            }
        }
        Format::Table => {
            let mut table = create_table();
            add_header(&mut table, &["Property", "Value"]);
            for (key, value) in items {
                table.add_row(vec![Cell::new(key).fg(Color::Green), Cell::new(value)]);
            }
            println!("{table}");
        }
    }
}

/// Print a section heading (respects quiet mode).
pub fn heading(msg: &str, quiet: bool) {
    if !quiet {
        println!("\n=== {msg} ===");
    }
}

/// Print a status message (respects quiet mode).
pub fn status(msg: &str, quiet: bool) {
    if !quiet {
        println!("{msg}");
    }
}
