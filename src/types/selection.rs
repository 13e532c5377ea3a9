use serde::Serialize;

use super::Table;
use crate::cell_ref::CellAddress;
use crate::numfmt;

/// Single-cell selection with a transient edit buffer.
///
/// The buffer is decoupled from the committed table until
/// [`crate::editor::mutation::commit_cell`] is applied with it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    /// Active cell, `None` when nothing is selected.
    pub active: Option<CellAddress>,
    /// In-progress edit text for the active cell.
    pub buffer: String,
}

impl Selection {
    /// Select `addr` and load its committed value into the buffer.
    ///
    /// Addresses outside the table are still selectable; the buffer starts
    /// empty and a later commit is ignored.
    pub fn select(&mut self, table: &Table, addr: CellAddress) {
        self.active = Some(addr);
        self.buffer = table.cell_or_empty(addr).to_string();
    }

    pub fn set_buffer(&mut self, value: &str) {
        value.clone_into(&mut self.buffer);
    }

    /// Store a value coming from an HTML date input (`yyyy-mm-dd`).
    pub fn set_buffer_from_date_input(&mut self, value: &str) {
        self.buffer = numfmt::date_from_input(value);
    }

    /// Drop the selection and buffer (Escape). The table is untouched.
    pub fn cancel(&mut self) {
        self.active = None;
        self.buffer.clear();
    }

    /// Take the pending edit, clearing the selection.
    pub fn take_pending(&mut self) -> Option<(CellAddress, String)> {
        let addr = self.active.take()?;
        Some((addr, std::mem::take(&mut self.buffer)))
    }

    pub fn is_active(&self, addr: CellAddress) -> bool {
        self.active == Some(addr)
    }
}
