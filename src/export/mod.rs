//! CSV export pipeline.
//!
//! Produces the file the host offers for download: the current view of the
//! table (filtered and sorted rows, hidden columns removed) encoded as CSV.
//! Triggering the download is left to the host.

use serde::Serialize;

use crate::csv::{self, Delimiter};
use crate::types::{Table, ViewState};

/// Suggested download name for exports.
pub const EXPORT_FILENAME: &str = "spreadsheet.csv";

/// MIME type for the exported blob.
pub const EXPORT_MIME_TYPE: &str = "text/csv";

/// A ready-to-download CSV document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvExport {
    pub filename: &'static str,
    pub mime_type: &'static str,
    pub content: String,
}

/// Encode what the user currently sees.
pub fn export_view(table: &Table, view: &ViewState) -> CsvExport {
    let visible = view.visible_columns(table);
    let rows = view.rows(table);
    let content = csv::encode_rows(&table.columns, &rows, &visible, Delimiter::Comma);
    tracing::debug!(
        rows = rows.len(),
        columns = visible.len(),
        bytes = content.len(),
        "csv export"
    );
    CsvExport {
        filename: EXPORT_FILENAME,
        mime_type: EXPORT_MIME_TYPE,
        content,
    }
}
