//! CSV/TSV codec for [`Table`] values.
//!
//! Encoding policy (fixed, both directions agree on it):
//! - header fields are quoted only when they contain a quote, the separator
//!   or a line break
//! - row fields are always quoted, with embedded `"` doubled
//! - every line, including the last, ends in `\n`
//!
//! Decoding never fails. The header line is split naively on the separator
//! (quoted header fields are not supported); body lines are parsed
//! quote-aware and fall back to a naive split when a quote is left open.
//! Blank lines are skipped and ragged rows are kept as parsed. Cells
//! containing line breaks do not survive a round trip.

use crate::types::Table;

/// Field separator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
}

impl Delimiter {
    pub fn char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
        }
    }

    /// Pick the separator from a file name (`.tsv` -> tab, anything else -> comma).
    pub fn from_file_name(name: &str) -> Self {
        let is_tsv = name
            .rsplit_once('.')
            .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("tsv"));
        if is_tsv {
            Delimiter::Tab
        } else {
            Delimiter::Comma
        }
    }
}

/// Encode the columns at `visible` as comma-separated text.
pub fn encode(table: &Table, visible: &[usize]) -> String {
    encode_rows(&table.columns, &table.rows, visible, Delimiter::Comma)
}

/// Encode an already-derived row sequence (e.g. a filtered, sorted view).
///
/// Cells missing from short rows encode as `""`; indices past the header
/// encode as an empty header field.
pub fn encode_rows(
    columns: &[String],
    rows: &[Vec<String>],
    visible: &[usize],
    delim: Delimiter,
) -> String {
    let sep = delim.char();
    let mut out = String::new();

    for (i, &col) in visible.iter().enumerate() {
        if i > 0 {
            out.push(sep);
        }
        let name = columns.get(col).map_or("", String::as_str);
        push_header_field(&mut out, name, sep);
    }
    out.push('\n');

    for row in rows {
        for (i, &col) in visible.iter().enumerate() {
            if i > 0 {
                out.push(sep);
            }
            push_quoted(&mut out, row.get(col).map_or("", String::as_str));
        }
        out.push('\n');
    }
    out
}

fn push_header_field(out: &mut String, name: &str, sep: char) {
    let needs_quotes = name
        .chars()
        .any(|c| c == '"' || c == sep || c == '\n' || c == '\r');
    if needs_quotes {
        push_quoted(out, name);
    } else {
        out.push_str(name);
    }
}

fn push_quoted(out: &mut String, value: &str) {
    out.push('"');
    out.push_str(&value.replace('"', "\"\""));
    out.push('"');
}

/// Decode comma-separated text into a table.
pub fn decode(text: &str) -> Table {
    decode_with(text, Delimiter::Comma)
}

/// Decode delimited text into a table, best-effort.
///
/// The first line is always the header, even when blank (a single
/// empty-named column). Blank body lines are skipped. A document with no
/// non-blank line decodes to an empty table.
pub fn decode_with(text: &str, delim: Delimiter) -> Table {
    let sep = delim.char();
    if text.lines().all(str::is_empty) {
        return Table::default();
    }

    let mut lines = text.lines();
    let Some(header) = lines.next() else {
        return Table::default();
    };
    let columns = header.split(sep).map(str::to_string).collect();
    let rows = lines
        .filter(|line| !line.is_empty())
        .map(|line| split_csv_line(line, sep).unwrap_or_else(|| naive_split(line, sep)))
        .collect();

    Table::new(columns, rows)
}

fn naive_split(line: &str, sep: char) -> Vec<String> {
    line.split(sep).map(str::to_string).collect()
}

/// Split a CSV line respecting quoted fields.
///
/// Returns `None` when a quoted field is never closed.
fn split_csv_line(line: &str, sep: char) -> Option<Vec<String>> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    // Escaped quote
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(ch);
            }
        } else if ch == '"' {
            in_quotes = true;
        } else if ch == sep {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    if in_quotes {
        return None;
    }
    fields.push(current);
    Some(fields)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_split_quoted() {
        let fields = split_csv_line(r#""Hello, World",42,"She said ""hi""""#, ',').unwrap();
        assert_eq!(fields, vec!["Hello, World", "42", r#"She said "hi""#]);
    }

    #[test]
    fn test_split_trailing_separator_yields_empty_field() {
        assert_eq!(split_csv_line("a,b,", ',').unwrap(), vec!["a", "b", ""]);
    }

    #[test]
    fn test_unterminated_quote_falls_back_to_naive_split() {
        assert_eq!(split_csv_line(r#""open,field"#, ','), None);
        let t = decode("H1,H2\n\"open,field\n");
        assert_eq!(t.rows, vec![vec!["\"open", "field"]]);
    }

    #[test]
    fn test_decode_tsv() {
        let t = decode_with("A\tB\n\"x\ty\"\tz\n", Delimiter::Tab);
        assert_eq!(t.columns, vec!["A", "B"]);
        assert_eq!(t.rows[0], vec!["x\ty", "z"]);
    }

    #[test]
    fn test_delimiter_from_file_name() {
        assert_eq!(Delimiter::from_file_name("data.TSV"), Delimiter::Tab);
        assert_eq!(Delimiter::from_file_name("data.csv"), Delimiter::Comma);
        assert_eq!(Delimiter::from_file_name("tsv"), Delimiter::Comma);
    }

    #[test]
    fn test_header_quoting_only_when_needed() {
        let columns = vec!["Plain".to_string(), "a,b".to_string(), "say \"x\"".to_string()];
        let text = encode_rows(&columns, &[], &[0, 1, 2], Delimiter::Comma);
        assert_eq!(text, "Plain,\"a,b\",\"say \"\"x\"\"\"\n");
    }

    #[test]
    fn test_empty_csv() {
        assert_eq!(decode(""), Table::default());
        assert_eq!(decode("\n\n"), Table::default());
    }
}
