//! Link targets for URL cells.

/// Link target for a URL cell.
///
/// Values already starting with `http` are used as-is; bare hosts such as
/// `www.example.com` get an `https://` scheme. Empty cells have no link.
pub fn link_href(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with("http") {
        Some(trimmed.to_string())
    } else {
        Some(format!("https://{trimmed}"))
    }
}
