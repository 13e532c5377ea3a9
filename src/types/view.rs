use serde::{Deserialize, Serialize};

use super::Table;
use crate::view;

/// Derived display settings layered over a [`Table`]. Never authoritative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    /// Hidden column indices, in the order they were hidden.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hidden_columns: Vec<usize>,
    /// Column to sort ascending by, `None` for table order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_key: Option<usize>,
    /// Substring the first column must contain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_text: Option<String>,
}

impl ViewState {
    /// Hide a column. Hiding it twice is a no-op.
    pub fn hide_column(&mut self, col: usize) {
        if !self.hidden_columns.contains(&col) {
            self.hidden_columns.push(col);
        }
    }

    /// Unhide a column. Unhiding a visible column is a no-op.
    pub fn unhide_column(&mut self, col: usize) {
        self.hidden_columns.retain(|&c| c != col);
    }

    pub fn is_hidden(&self, col: usize) -> bool {
        self.hidden_columns.contains(&col)
    }

    pub fn set_sort(&mut self, col: Option<usize>) {
        self.sort_key = col;
    }

    /// Set the filter needle; an empty string clears it.
    pub fn set_filter(&mut self, needle: &str) {
        self.filter_text = (!needle.is_empty()).then(|| needle.to_string());
    }

    /// Indices of the columns that are not hidden, in table order.
    pub fn visible_columns(&self, table: &Table) -> Vec<usize> {
        (0..table.col_count())
            .filter(|c| !self.is_hidden(*c))
            .collect()
    }

    /// Table row indices in display order: filtered first, then sorted.
    pub fn row_order(&self, table: &Table) -> Vec<usize> {
        let needle = self.filter_text.as_deref().unwrap_or("");
        let mut order = view::filter_indices(&table.rows, needle);
        if let Some(col) = self.sort_key {
            view::sort_order_by(&table.rows, &mut order, col);
        }
        order
    }

    /// The table rows in display order, all columns kept.
    pub fn rows(&self, table: &Table) -> Vec<Vec<String>> {
        view::pick(&table.rows, &self.row_order(table))
    }

    /// Forget every setting, as after an import.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
