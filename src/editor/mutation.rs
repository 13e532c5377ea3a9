//! Structural edits to a [`Table`].
//!
//! Each function takes the current table and returns a complete new one, so a
//! reader holding the previous value never sees a half-applied edit.

use crate::cell_ref::CellAddress;
use crate::types::Table;

/// Name given to the column appended when the table has `col_count` columns.
pub fn next_column_name(col_count: usize) -> String {
    format!("Item {}", col_count + 1)
}

/// Append a column named `Item N` and an empty cell to every row.
pub fn add_column(table: &Table) -> Table {
    let mut next = table.clone();
    next.columns.push(next_column_name(table.col_count()));
    for row in &mut next.rows {
        row.push(String::new());
    }
    tracing::debug!(columns = next.col_count(), "column added");
    next
}

/// Replace the cell at `addr` with `value`.
///
/// Out-of-range addresses leave the table unchanged. Committing to the last
/// row appends exactly one empty row, so the grid grows as the user reaches
/// the bottom.
pub fn commit_cell(table: &Table, addr: CellAddress, value: &str) -> Table {
    let mut next = table.clone();
    let Some(cell) = next
        .rows
        .get_mut(addr.row)
        .and_then(|row| row.get_mut(addr.col))
    else {
        tracing::debug!(%addr, "commit outside table ignored");
        return next;
    };
    value.clone_into(cell);

    if addr.row + 1 == next.row_count() {
        let width = next.col_count();
        next.rows.push(vec![String::new(); width]);
        tracing::debug!(rows = next.row_count(), "grid grown past last row");
    }
    next
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn jobs() -> Table {
        Table::new(
            vec!["Job".into(), "Status".into()],
            vec![
                vec!["A".into(), "Done".into()],
                vec!["B".into(), "Open".into()],
            ],
        )
    }

    #[test]
    fn test_add_column_pads_rows() {
        let t = add_column(&jobs());
        assert_eq!(t.columns, vec!["Job", "Status", "Item 3"]);
        assert_eq!(t.rows, vec![vec!["A", "Done", ""], vec!["B", "Open", ""]]);
        assert!(t.is_rectangular());
    }

    #[test]
    fn test_add_column_leaves_source_untouched() {
        let src = jobs();
        let _ = add_column(&src);
        assert_eq!(src, jobs());
    }

    #[test]
    fn test_commit_middle_row_does_not_grow() {
        let t = commit_cell(&jobs(), CellAddress::new(0, 1), "Blocked");
        assert_eq!(t.row_count(), 2);
        assert_eq!(t.rows[0], vec!["A", "Blocked"]);
    }

    #[test]
    fn test_commit_last_row_grows_once() {
        let t = commit_cell(&jobs(), CellAddress::new(1, 0), "C");
        assert_eq!(t.row_count(), 3);
        assert_eq!(t.rows[1], vec!["C", "Open"]);
        assert_eq!(t.rows[2], vec!["", ""]);
    }

    #[test]
    fn test_commit_out_of_range_is_noop() {
        let src = jobs();
        assert_eq!(commit_cell(&src, CellAddress::new(2, 0), "x"), src);
        assert_eq!(commit_cell(&src, CellAddress::new(0, 2), "x"), src);
        assert_eq!(commit_cell(&Table::default(), CellAddress::new(0, 0), "x"), Table::default());
    }

    #[test]
    fn test_commit_to_short_ragged_row_is_noop() {
        let src = Table::new(vec!["A".into(), "B".into()], vec![vec!["x".into()]]);
        assert_eq!(commit_cell(&src, CellAddress::new(0, 1), "y"), src);
    }
}
