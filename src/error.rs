//! Structured error types for sheetlink.
//!
//! Most grid operations are infallible by construction (out-of-range commits
//! are ignored, CSV import is best-effort). What remains are share tokens,
//! which arrive from untrusted URLs, and host-supplied configuration.

/// Why a share token could not be turned back into a table.
#[derive(Debug, thiserror::Error)]
pub enum ShareError {
    /// Nothing after the `#`.
    #[error("share token is empty")]
    Empty,

    /// Characters outside both base64 alphabets, or bad padding.
    #[error("share token is not valid base64: {0}")]
    Alphabet(#[from] base64::DecodeError),

    /// Decoded bytes are not UTF-8 text.
    #[error("share token payload is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Payload is not a `{columns, rows}` JSON object of strings.
    #[error("share token payload is malformed: {0}")]
    Payload(#[from] serde_json::Error),

    /// A row does not have one cell per column.
    #[error("share token row {row} has {found} cells, expected {expected}")]
    Shape {
        row: usize,
        found: usize,
        expected: usize,
    },
}

/// All errors surfaced by the sheetlink library.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    /// Share token rejected.
    #[error("Share link: {0}")]
    Share(#[from] ShareError),

    /// Column policy configuration could not be read.
    #[error("Column policy config: {0}")]
    Config(String),

    /// Invalid cell reference such as `"1A"`.
    #[error("Invalid cell reference: {0}")]
    CellRef(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SheetError>;

#[cfg(target_arch = "wasm32")]
impl From<SheetError> for wasm_bindgen::JsValue {
    fn from(e: SheetError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
