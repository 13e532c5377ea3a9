//! Cell addresses and A1-style references.

use serde::{Deserialize, Serialize};

/// A cell position, 0-indexed, meaningful only relative to one table snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellAddress {
    pub row: usize,
    pub col: usize,
}

impl CellAddress {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Format as an A1-style reference (`(2, 1)` -> `"B3"`).
    pub fn to_a1(self) -> String {
        format!("{}{}", column_letters(self.col), self.row + 1)
    }
}

impl std::fmt::Display for CellAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_a1())
    }
}

/// Spreadsheet column letters for a 0-indexed column (`0` -> `A`, `26` -> `AA`).
pub fn column_letters(col: usize) -> String {
    let mut letters = Vec::new();
    let mut n = col;
    loop {
        // n % 26 < 26, the cast cannot truncate
        #[allow(clippy::cast_possible_truncation)]
        letters.push(char::from(b'A' + (n % 26) as u8));
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    letters.iter().rev().collect()
}

/// Parse a reference like `"B3"` (or `"$B$3"`) into a [`CellAddress`].
///
/// Letters must precede digits and the row number starts at 1.
pub fn parse_cell_ref(cell_ref: &str) -> Option<CellAddress> {
    let mut col: usize = 0;
    let mut row: usize = 0;
    let mut saw_col = false;
    let mut saw_row = false;

    for ch in cell_ref.trim().chars() {
        if ch == '$' {
            continue;
        }
        if ch.is_ascii_alphabetic() {
            if saw_row {
                return None;
            }
            let digit = u32::from(ch.to_ascii_uppercase()) - u32::from('A') + 1;
            col = col.checked_mul(26)?.checked_add(digit as usize)?;
            saw_col = true;
        } else if let Some(d) = ch.to_digit(10) {
            row = row.checked_mul(10)?.checked_add(d as usize)?;
            saw_row = true;
        } else {
            return None;
        }
    }

    if !saw_col || !saw_row || row == 0 {
        return None;
    }

    Some(CellAddress::new(row - 1, col - 1))
}
