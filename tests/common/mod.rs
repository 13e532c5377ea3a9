//! Common test utilities for building tables and rows.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use sheetlink::Table;

/// Build owned rows from string literals.
#[must_use]
pub fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
    data.iter()
        .map(|r| r.iter().map(|c| (*c).to_string()).collect())
        .collect()
}

/// Build a table from string literals.
#[must_use]
pub fn table(columns: &[&str], data: &[&[&str]]) -> Table {
    Table::new(
        columns.iter().map(|c| (*c).to_string()).collect(),
        rows(data),
    )
}

/// The two-row job table used throughout the examples.
#[must_use]
pub fn jobs() -> Table {
    table(&["Job", "Status"], &[&["A", "Done"], &["B", "Open"]])
}

/// Every column index of a table.
#[must_use]
pub fn all_columns(table: &Table) -> Vec<usize> {
    (0..table.col_count()).collect()
}

/// A table whose cells exercise quoting: separators, quotes, unicode.
#[must_use]
pub fn awkward() -> Table {
    table(
        &["Name", "Notes", "Amount"],
        &[
            &["Smith, Jane", "said \"hi\"", "1,000"],
            &["", "\"\"", "  padded  "],
            &["Ünïcödé ✓", "tab\there", "-5"],
            &["\"", ",", ""],
        ],
    )
}
