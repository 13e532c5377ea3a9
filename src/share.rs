//! Share tokens: a whole [`Table`] packed into text that fits in a URL fragment.
//!
//! Format: the table as JSON `{"columns": [...], "rows": [[...]]}`, UTF-8
//! encoded, then base64 with the URL-safe alphabet and no padding.
//!
//! Tokens arrive from links anyone can edit, so decoding validates the shape
//! and reports every problem as a [`ShareError`] instead of panicking. Links
//! made by the older page used the standard alphabet with padding over the
//! same UTF-8 JSON; those still decode.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::error::ShareError;
use crate::types::Table;

#[derive(Serialize)]
struct SharePayloadRef<'a> {
    columns: &'a [String],
    rows: &'a [Vec<String>],
}

#[derive(Deserialize)]
struct SharePayload {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// Encode the full table (all columns, all rows) as a share token.
///
/// Ragged rows (possible after a CSV import) are padded with `""` or cut to
/// the column count so the token always decodes.
pub fn encode(table: &Table) -> String {
    let width = table.col_count();
    let rows: Cow<'_, [Vec<String>]> = if table.is_rectangular() {
        Cow::Borrowed(table.rows.as_slice())
    } else {
        Cow::Owned(
            table
                .rows
                .iter()
                .map(|row| {
                    let mut row = row.clone();
                    row.resize(width, String::new());
                    row
                })
                .collect(),
        )
    };
    let payload = SharePayloadRef {
        columns: &table.columns,
        rows: &rows,
    };
    // Serializing strings and vectors of strings cannot fail.
    let json = serde_json::to_string(&payload).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json.as_bytes())
}

/// Decode a share token back into a table.
///
/// A leading `#` is ignored. The caller keeps its current table on error.
pub fn decode(token: &str) -> Result<Table, ShareError> {
    let token = token.trim();
    let token = token.strip_prefix('#').unwrap_or(token);
    if token.is_empty() {
        return Err(ShareError::Empty);
    }

    let bytes = decode_base64(token)?;
    let json = String::from_utf8(bytes)?;
    let payload: SharePayload = serde_json::from_str(&json)?;

    let expected = payload.columns.len();
    if let Some((row, cells)) = payload
        .rows
        .iter()
        .enumerate()
        .find(|(_, cells)| cells.len() != expected)
    {
        return Err(ShareError::Shape {
            row,
            found: cells.len(),
            expected,
        });
    }

    Ok(Table::new(payload.columns, payload.rows))
}

fn decode_base64(token: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_NO_PAD
        .decode(token)
        .or_else(|url_safe_err| STANDARD.decode(token).map_err(|_| url_safe_err))
}

/// The token part of a location hash: `"#abc"` -> `Some("abc")`.
///
/// Returns `None` for an empty hash or a bare `#`.
pub fn fragment_token(hash: &str) -> Option<&str> {
    let token = hash.strip_prefix('#').unwrap_or(hash);
    (!token.is_empty()).then_some(token)
}
