//! Tests for CSV import and export.
//!
//! Export quotes every body field and only the header fields that need it.
//! Import splits the header naively and the body quote-aware, never failing.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

mod common;

use common::{all_columns, awkward, jobs, rows, table};
use sheetlink::cell_ref::CellAddress;
use sheetlink::csv::{decode, decode_with, encode, Delimiter};
use sheetlink::editor::mutation::{add_column, commit_cell};
use sheetlink::Table;
use test_case::test_case;

// ============================================================================
// Encoding
// ============================================================================

#[test]
fn test_encode_example_scenario() {
    let t = add_column(&jobs());
    let t = commit_cell(&t, CellAddress::new(1, 1), "Blocked");
    assert_eq!(
        encode(&t, &all_columns(&t)),
        "Job,Status,Item 3\n\"A\",\"Done\",\"\"\n\"B\",\"Blocked\",\"\"\n\"\",\"\",\"\"\n"
    );
}

#[test]
fn test_encode_only_visible_columns_in_given_order() {
    let t = table(&["a", "b", "c"], &[&["1", "2", "3"]]);
    assert_eq!(encode(&t, &[2, 0]), "c,a\n\"3\",\"1\"\n");
}

#[test]
fn test_encode_no_visible_columns() {
    assert_eq!(encode(&jobs(), &[]), "\n\n\n");
}

#[test]
fn test_encode_doubles_quotes() {
    let t = table(&["q"], &[&["a \"b\" c"]]);
    assert_eq!(encode(&t, &[0]), "q\n\"a \"\"b\"\" c\"\n");
}

// ============================================================================
// Decoding
// ============================================================================

#[test]
fn test_decode_basic() {
    let t = decode("Name,Age,City\nAlice,30,NYC\nBob,25,LA");
    assert_eq!(t.columns, vec!["Name", "Age", "City"]);
    assert_eq!(t.rows, rows(&[&["Alice", "30", "NYC"], &["Bob", "25", "LA"]]));
}

#[test]
fn test_decode_header_only() {
    let t = decode("A,B,C\n");
    assert_eq!(t.columns, vec!["A", "B", "C"]);
    assert!(t.rows.is_empty());
}

#[test]
fn test_decode_empty_document() {
    assert_eq!(decode(""), Table::default());
}

#[test]
fn test_decode_blank_only_document() {
    assert_eq!(decode("\n\n"), Table::default());
    assert_eq!(decode("\r\n"), Table::default());
}

#[test]
fn test_roundtrip_empty_column_name() {
    let t = Table::new(vec!["".into()], rows(&[&["a"], &["b"]]));
    let text = encode(&t, &[0]);
    assert_eq!(text, "\n\"a\"\n\"b\"\n");
    assert_eq!(decode(&text), t);
}

#[test]
fn test_blank_header_keeps_first_body_row() {
    let t = decode("\n\"x\"\n\n\"y\"\n");
    assert_eq!(t.columns, vec![""]);
    assert_eq!(t.rows, rows(&[&["x"], &["y"]]));
}

#[test]
fn test_zero_visible_columns_decodes_to_empty_table() {
    // With no columns, every line is blank and no cell survives the export.
    let text = encode(&jobs(), &[]);
    assert_eq!(text, "\n".repeat(jobs().row_count() + 1));
    let back = decode(&text);
    assert_eq!(back.col_count(), 0);
    assert!(back.rows.iter().all(Vec::is_empty));
}

#[test]
fn test_decode_skips_blank_lines_and_crlf() {
    let t = decode("A,B\r\n\"1\",\"2\"\r\n\r\n\"3\",\"4\"\r\n\r\n");
    assert_eq!(t.rows, rows(&[&["1", "2"], &["3", "4"]]));
}

#[test]
fn test_decode_keeps_ragged_rows() {
    let t = decode("A,B,C\n1\n1,2,3,4\n");
    assert_eq!(t.rows, rows(&[&["1"], &["1", "2", "3", "4"]]));
    assert!(!t.is_rectangular());
}

#[test]
fn test_decode_header_is_split_naively() {
    let t = decode("\"a,b\",c\n\"1\",\"2\"\n");
    assert_eq!(t.columns, vec!["\"a", "b\"", "c"]);
}

#[test_case("\"x,y\",z", &["x,y", "z"] ; "embedded separator")]
#[test_case("\"say \"\"hi\"\"\",2", &["say \"hi\"", "2"] ; "doubled quotes")]
#[test_case("a,,c", &["a", "", "c"] ; "empty middle field")]
#[test_case("a,b,", &["a", "b", ""] ; "trailing separator")]
#[test_case("\"\",\"\"", &["", ""] ; "quoted empties")]
#[test_case("\"open,ended", &["\"open", "ended"] ; "unterminated quote degrades")]
#[test_case("mid\"quote,x", &["mid\"quote", "x"] ; "stray quote degrades")]
#[test_case("ab\"c\"d,x", &["abcd", "x"] ; "quoted run inside a field")]
fn test_decode_body_line(line: &str, expected: &[&str]) {
    let t = decode(&format!("H\n{line}\n"));
    assert_eq!(t.rows, vec![expected.to_vec()]);
}

#[test]
fn test_decode_tab_delimited() {
    let t = decode_with("A\tB\n\"1\"\t\"x,y\"\n", Delimiter::Tab);
    assert_eq!(t.rows, rows(&[&["1", "x,y"]]));
}

// ============================================================================
// Round trip
// ============================================================================

#[test]
fn test_roundtrip_all_columns() {
    let t = awkward();
    assert_eq!(decode(&encode(&t, &all_columns(&t))), t);
}

#[test]
fn test_roundtrip_projection() {
    let t = awkward();
    let back = decode(&encode(&t, &[2, 0]));
    assert_eq!(back.columns, vec!["Amount", "Name"]);
    for (orig, got) in t.rows.iter().zip(&back.rows) {
        assert_eq!(got, &vec![orig[2].clone(), orig[0].clone()]);
    }
    assert_eq!(back.row_count(), t.row_count());
}

#[test]
fn test_roundtrip_seed_sheet() {
    let t = Table::seed();
    assert_eq!(decode(&encode(&t, &all_columns(&t))), t);
}
