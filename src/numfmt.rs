//! Display formatting for cell text
//!
//! Cells are plain strings; formatting only changes how a value is shown or
//! edited, never what is stored:
//! - Currency cells group integer digits in threes (`6200000` -> `6,200,000`)
//! - Date cells are stored as `dd-mm-yyyy` while the browser date picker
//!   speaks `yyyy-mm-dd`

/// Insert `,` thousands separators into an integer string.
///
/// Accepts an optional leading `-`. Anything that is not a plain run of ASCII
/// digits (decimals, already-grouped numbers, words) is returned unchanged.
pub fn group_thousands(value: &str) -> String {
    let (sign, digits) = match value.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", value),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return value.to_string();
    }

    let mut grouped = String::with_capacity(value.len() + digits.len() / 3);
    grouped.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Reverse the dash-separated parts of a date (`dd-mm-yyyy` <-> `yyyy-mm-dd`).
fn reverse_date_parts(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    value.rsplit('-').collect::<Vec<_>>().join("-")
}

/// Stored `dd-mm-yyyy` text -> value for an HTML date input.
pub fn date_to_input(stored: &str) -> String {
    reverse_date_parts(stored)
}

/// HTML date input `yyyy-mm-dd` -> stored `dd-mm-yyyy` text.
pub fn date_from_input(input: &str) -> String {
    reverse_date_parts(input)
}
