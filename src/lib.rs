//! sheetlink - spreadsheet-style data grid core for the web
//!
//! The data side of an editable grid, with no rendering attached:
//! - Single-cell selection with an edit buffer, commit and cancel
//! - Column add and an ever-growing last row
//! - Sort, first-column filter, hide/unhide (derived views, never mutating)
//! - CSV import/export
//! - Share tokens that carry a whole table in a URL fragment
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { SheetGrid } from 'sheetlink';
//! await init();
//! const grid = new SheetGrid();
//! grid.load_fragment(window.location.hash);
//! grid.select(0, 2);
//! grid.set_buffer("Blocked");
//! grid.commit();
//! const link = location.origin + location.pathname + "#" + grid.share_token();
//! ```

pub mod cell_ref;
pub mod color;
pub mod csv;
pub mod editor;
pub mod error;
pub mod export;
pub mod hyperlinks;
pub mod numfmt;
pub mod share;
pub mod types;
pub mod view;

use wasm_bindgen::prelude::*;

// Re-export the main grid struct
pub use editor::SheetGrid;

pub use types::*;

/// Convert CSV text straight into a share token.
#[must_use]
#[wasm_bindgen]
pub fn share_token_from_csv(text: &str) -> String {
    share::encode(&csv::decode(text))
}

/// Convert a share token into CSV text with every column visible.
///
/// Returns `None` if the token is malformed.
#[must_use]
#[wasm_bindgen]
pub fn csv_from_share_token(token: &str) -> Option<String> {
    let table = share::decode(token).ok()?;
    let all: Vec<usize> = (0..table.col_count()).collect();
    Some(csv::encode(&table, &all))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
