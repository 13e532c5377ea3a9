//! Pure view transforms over table rows.
//!
//! Nothing here mutates its input. The index variants return positions into
//! the original row slice so a host can map a displayed row back to the table
//! row it came from (e.g. to commit an edit made in a sorted view).

/// Column used as the anchor for substring filtering.
pub const FILTER_ANCHOR_COL: usize = 0;

fn cell_at(row: &[String], col: usize) -> &str {
    row.get(col).map_or("", String::as_str)
}

/// Positions of `rows` in ascending order of the cell at `col`.
///
/// The sort is stable and compares strings lexicographically (by code point).
/// `None` keeps the original order.
pub fn sort_indices(rows: &[Vec<String>], col: Option<usize>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..rows.len()).collect();
    if let Some(col) = col {
        sort_order_by(rows, &mut order, col);
    }
    order
}

/// Stable-sort an existing order of row positions by the cell at `col`.
pub(crate) fn sort_order_by(rows: &[Vec<String>], order: &mut [usize], col: usize) {
    order.sort_by(|&a, &b| {
        let left = rows.get(a).map_or("", |r| cell_at(r, col));
        let right = rows.get(b).map_or("", |r| cell_at(r, col));
        left.cmp(right)
    });
}

/// Rows sorted ascending by the cell at `col`; `None` restores original order.
pub fn sort_by(rows: &[Vec<String>], col: Option<usize>) -> Vec<Vec<String>> {
    pick(rows, &sort_indices(rows, col))
}

/// Whether a row passes the substring filter on the anchor column.
pub fn row_matches(row: &[String], needle: &str) -> bool {
    needle.is_empty() || cell_at(row, FILTER_ANCHOR_COL).contains(needle)
}

/// Positions of rows whose first column contains `needle` (case-sensitive).
pub fn filter_indices(rows: &[Vec<String>], needle: &str) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .filter(|(_, row)| row_matches(row, needle))
        .map(|(i, _)| i)
        .collect()
}

/// Rows whose first column contains `needle`; an empty needle keeps every row.
pub fn filter_by(rows: &[Vec<String>], needle: &str) -> Vec<Vec<String>> {
    pick(rows, &filter_indices(rows, needle))
}

/// Clone the rows at `order`, skipping positions that do not exist.
pub fn pick(rows: &[Vec<String>], order: &[usize]) -> Vec<Vec<String>> {
    order.iter().filter_map(|&i| rows.get(i).cloned()).collect()
}

/// Keep only the cells at `visible` in each row; missing cells become `""`.
pub fn project(rows: &[Vec<String>], visible: &[usize]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| {
            visible
                .iter()
                .map(|&c| cell_at(row, c).to_string())
                .collect()
        })
        .collect()
}
