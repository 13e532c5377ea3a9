//! Grid session controller exported to JavaScript.
//!
//! `SheetGrid` owns the current [`Table`], the single-cell [`Selection`], the
//! [`ViewState`] and the [`ColumnPolicies`]. Each method is one user command;
//! the table is replaced wholesale by the functions in [`mutation`], so a
//! command (including auto-grow) is fully applied before the next one runs.
//!
//! Rendering, event wiring, clipboard, file picking and URL handling stay on
//! the JS side; they call into this type and read its snapshots.

pub mod mutation;

use wasm_bindgen::prelude::*;

use crate::cell_ref::{parse_cell_ref, CellAddress};
use crate::error::{Result, SheetError};
use crate::export::{self, CsvExport};
use crate::share;
use crate::types::{CellDisplay, ColumnPolicies, EditorKind, Selection, Table, ViewState};
use crate::{csv, view};

/// How long the host should show a status message before clearing it.
pub const NOTICE_DURATION_MS: u32 = 2000;

/// Message shown after the share link has been copied.
pub const SHARE_COPIED_NOTICE: &str = "Shareable link copied to clipboard!";

/// The main grid struct exported to JavaScript.
#[wasm_bindgen]
pub struct SheetGrid {
    table: Table,
    selection: Selection,
    view: ViewState,
    policies: ColumnPolicies,
    notice: Option<String>,
    #[cfg(target_arch = "wasm32")]
    change_callback: Option<js_sys::Function>,
}

impl Default for SheetGrid {
    fn default() -> Self {
        Self::with_table(Table::seed(), ColumnPolicies::default())
    }
}

// ============================================================================
// Commands shared by JS and Rust callers
// ============================================================================

#[wasm_bindgen]
impl SheetGrid {
    /// Create a grid holding the sample sheet.
    #[wasm_bindgen(constructor)]
    pub fn new() -> SheetGrid {
        #[cfg(target_arch = "wasm32")]
        console_error_panic_hook::set_once();
        Self::default()
    }

    /// Create an empty `Item 1..Item n` grid with plain-text columns.
    pub fn blank(col_count: usize, row_count: usize) -> SheetGrid {
        #[cfg(target_arch = "wasm32")]
        console_error_panic_hook::set_once();
        Self::with_table(Table::items(col_count, row_count), ColumnPolicies::plain())
    }

    // ---- Table snapshot ----

    pub fn row_count(&self) -> usize {
        self.table.row_count()
    }

    pub fn col_count(&self) -> usize {
        self.table.col_count()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.table.columns.clone()
    }

    /// Committed value of a cell, `None` outside the table.
    pub fn cell_value(&self, row: usize, col: usize) -> Option<String> {
        self.table
            .cell(CellAddress::new(row, col))
            .map(str::to_string)
    }

    /// The whole table as `{"columns": [...], "rows": [[...]]}`.
    pub fn table_json(&self) -> String {
        serde_json::to_string(&self.table).unwrap_or_default()
    }

    // ---- Selection and editing ----

    /// Select a cell and load its value into the edit buffer.
    pub fn select(&mut self, row: usize, col: usize) {
        self.selection
            .select(&self.table, CellAddress::new(row, col));
    }

    /// Current selection as `[row, col]`, or `None`.
    pub fn selected(&self) -> Option<Vec<usize>> {
        self.selection.active.map(|a| vec![a.row, a.col])
    }

    pub fn buffer(&self) -> String {
        self.selection.buffer.clone()
    }

    pub fn set_buffer(&mut self, value: &str) {
        self.selection.set_buffer(value);
    }

    /// Update the buffer from an HTML date input value (`yyyy-mm-dd`).
    pub fn set_date_input(&mut self, value: &str) {
        self.selection.set_buffer_from_date_input(value);
    }

    /// Apply the edit buffer to the selected cell and clear the selection.
    ///
    /// Returns `false` when nothing was selected.
    pub fn commit(&mut self) -> bool {
        let Some((addr, value)) = self.selection.take_pending() else {
            return false;
        };
        self.table = mutation::commit_cell(&self.table, addr, &value);
        self.changed();
        true
    }

    /// Discard the edit buffer and clear the selection.
    pub fn cancel(&mut self) {
        self.selection.cancel();
    }

    /// Route an editor key press: `Enter` commits, `Escape` cancels.
    ///
    /// Returns whether the key was handled.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match key {
            "Enter" => {
                self.commit();
                true
            }
            "Escape" => {
                self.cancel();
                true
            }
            _ => false,
        }
    }

    // ---- Structure ----

    pub fn add_column(&mut self) {
        self.table = mutation::add_column(&self.table);
        self.changed();
    }

    // ---- View ----

    /// Sort ascending by a column; `None` restores table order.
    pub fn sort(&mut self, col: Option<usize>) {
        self.view.set_sort(col);
    }

    /// Filter on the first column; an empty needle shows every row.
    pub fn filter(&mut self, needle: &str) {
        self.view.set_filter(needle);
    }

    pub fn hide_column(&mut self, col: usize) {
        self.view.hide_column(col);
    }

    pub fn unhide_column(&mut self, col: usize) {
        self.view.unhide_column(col);
    }

    /// Hidden columns in the order they were hidden.
    pub fn hidden_columns(&self) -> Vec<usize> {
        self.view.hidden_columns.clone()
    }

    pub fn visible_columns(&self) -> Vec<usize> {
        self.view.visible_columns(&self.table)
    }

    /// Table row indices in display order.
    pub fn row_order(&self) -> Vec<usize> {
        self.view.row_order(&self.table)
    }

    /// Displayed rows (visible columns only) as a JSON array of arrays.
    pub fn view_rows_json(&self) -> String {
        let rows = self.view.rows(&self.table);
        let projected = view::project(&rows, &self.visible_columns());
        serde_json::to_string(&projected).unwrap_or_default()
    }

    /// Display form of a cell under its column policy, as JSON.
    pub fn cell_display_json(&self, row: usize, col: usize) -> String {
        serde_json::to_string(&self.cell_display(CellAddress::new(row, col))).unwrap_or_default()
    }

    /// `"date"` for date-picker columns, `"text"` otherwise.
    pub fn editor_kind(&self, col: usize) -> String {
        match self.editor_for(col) {
            EditorKind::Date => "date".to_string(),
            EditorKind::Text => "text".to_string(),
        }
    }

    // ---- Import / export ----

    /// Replace the table with parsed CSV text and reset the view.
    pub fn import_csv(&mut self, text: &str) {
        self.import_table(csv::decode(text));
    }

    /// Import delimited text, choosing the separator from the file name.
    pub fn import_file(&mut self, file_name: &str, text: &str) {
        let delim = csv::Delimiter::from_file_name(file_name);
        self.import_table(csv::decode_with(text, delim));
    }

    /// CSV text of the current view.
    pub fn export_csv(&self) -> String {
        self.export_file().content
    }

    pub fn export_filename(&self) -> String {
        export::EXPORT_FILENAME.to_string()
    }

    // ---- Share ----

    /// Token encoding the whole table, for use after `#` in a link.
    pub fn share_token(&self) -> String {
        share::encode(&self.table)
    }

    /// Replace the table from a share token.
    ///
    /// On a malformed token the table is kept and `false` is returned.
    pub fn load_share_token(&mut self, token: &str) -> bool {
        match self.try_load_share_token(token) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring share token");
                false
            }
        }
    }

    /// Load from `location.hash` if it carries a token.
    pub fn load_fragment(&mut self, hash: &str) -> bool {
        match share::fragment_token(hash) {
            Some(token) => self.load_share_token(token),
            None => false,
        }
    }

    // ---- Status message ----

    /// Record that the host copied the share link.
    pub fn mark_share_copied(&mut self) {
        self.notice = Some(SHARE_COPIED_NOTICE.to_string());
    }

    pub fn notice(&self) -> Option<String> {
        self.notice.clone()
    }

    /// Called by the host after [`NOTICE_DURATION_MS`].
    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub fn notice_duration_ms(&self) -> u32 {
        NOTICE_DURATION_MS
    }
}

// ============================================================================
// WASM32-only: JS values and callbacks
// ============================================================================

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl SheetGrid {
    /// The table as a JS object.
    pub fn table_js(&self) -> std::result::Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.table)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// Display form of a cell as a JS object (`{kind, ...}`).
    pub fn cell_display_js(&self, row: usize, col: usize) -> std::result::Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.cell_display(CellAddress::new(row, col)))
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// Export payload `{filename, mimeType, content}`.
    pub fn export_js(&self) -> std::result::Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.export_file())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// Replace the column policies from a JSON object of name -> policy.
    pub fn configure_columns(&mut self, json: &str) -> std::result::Result<(), JsValue> {
        self.policies = ColumnPolicies::from_json(json)?;
        Ok(())
    }

    /// Register a callback invoked after every table change.
    pub fn set_change_callback(&mut self, callback: Option<js_sys::Function>) {
        self.change_callback = callback;
    }
}

// ============================================================================
// Rust-side API
// ============================================================================

impl SheetGrid {
    pub fn with_table(table: Table, policies: ColumnPolicies) -> Self {
        SheetGrid {
            table,
            selection: Selection::default(),
            view: ViewState::default(),
            policies,
            notice: None,
            #[cfg(target_arch = "wasm32")]
            change_callback: None,
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn policies(&self) -> &ColumnPolicies {
        &self.policies
    }

    pub fn set_policies(&mut self, policies: ColumnPolicies) {
        self.policies = policies;
    }

    /// Select a cell by A1 reference.
    pub fn select_ref(&mut self, cell_ref: &str) -> Result<()> {
        let addr =
            parse_cell_ref(cell_ref).ok_or_else(|| SheetError::CellRef(cell_ref.to_string()))?;
        self.selection.select(&self.table, addr);
        Ok(())
    }

    /// Replace the table from a share token, reporting why a token was rejected.
    ///
    /// The table, selection and view are untouched on error.
    pub fn try_load_share_token(&mut self, token: &str) -> Result<()> {
        let table = share::decode(token)?;
        self.table = table;
        self.selection.cancel();
        self.view.reset();
        self.changed();
        Ok(())
    }

    /// Display form of the cell at `addr` under its column's policy.
    pub fn cell_display(&self, addr: CellAddress) -> CellDisplay {
        let policy = self
            .table
            .column_name(addr.col)
            .map(|name| self.policies.policy_for(name))
            .unwrap_or_default();
        policy.display(self.table.cell_or_empty(addr))
    }

    pub fn editor_for(&self, col: usize) -> EditorKind {
        self.table
            .column_name(col)
            .map(|name| self.policies.policy_for(name))
            .unwrap_or_default()
            .editor()
    }

    /// The download the host should offer for "Export".
    pub fn export_file(&self) -> CsvExport {
        export::export_view(&self.table, &self.view)
    }

    fn import_table(&mut self, table: Table) {
        tracing::info!(
            columns = table.col_count(),
            rows = table.row_count(),
            rectangular = table.is_rectangular(),
            "table imported"
        );
        self.table = table;
        self.selection.cancel();
        self.view.reset();
        self.changed();
    }

    fn changed(&self) {
        #[cfg(target_arch = "wasm32")]
        if let Some(ref callback) = self.change_callback {
            let _ = callback.call0(&JsValue::NULL);
        }
    }
}
