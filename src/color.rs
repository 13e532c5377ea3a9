//! Badge colors for enumerated status and priority cells.

/// Status label -> background color.
pub const STATUS_COLORS: [(&str, &str); 4] = [
    ("In-process", "#fde68a"),
    ("Need to start", "#bae6fd"),
    ("Complete", "#bbf7d0"),
    ("Blocked", "#fecaca"),
];

/// Priority label -> background color.
pub const PRIORITY_COLORS: [(&str, &str); 3] = [
    ("High", "#fecaca"),
    ("Medium", "#fef9c3"),
    ("Low", "#bbf7d0"),
];

/// Badge background for labels outside the lookup tables.
pub const NEUTRAL_BADGE: &str = "#e5e7eb";

fn lookup(table: &[(&'static str, &'static str)], label: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == label)
        .map(|(_, color)| *color)
}

/// Color token for a status label; unknown labels are returned unchanged.
pub fn status_color(label: &str) -> &str {
    lookup(&STATUS_COLORS, label).unwrap_or(label)
}

/// Color token for a priority label; unknown labels are returned unchanged.
pub fn priority_color(label: &str) -> &str {
    lookup(&PRIORITY_COLORS, label).unwrap_or(label)
}

/// Which lookup table a badge draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    Status,
    Priority,
}

/// Background color to paint a badge with, falling back to [`NEUTRAL_BADGE`].
pub fn badge_color(kind: BadgeKind, label: &str) -> &'static str {
    let table: &[(&str, &str)] = match kind {
        BadgeKind::Status => &STATUS_COLORS,
        BadgeKind::Priority => &PRIORITY_COLORS,
    };
    lookup(table, label).unwrap_or(NEUTRAL_BADGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_colors() {
        let test_cases = [
            ("In-process", "#fde68a"),
            ("Need to start", "#bae6fd"),
            ("Complete", "#bbf7d0"),
            ("Blocked", "#fecaca"),
        ];
        for (label, expected) in test_cases {
            assert_eq!(status_color(label), expected, "status {label}");
        }
    }

    #[test]
    fn test_unknown_labels_pass_through() {
        assert_eq!(status_color("Archived"), "Archived");
        assert_eq!(priority_color("urgent"), "urgent");
        // lookups are exact, not case-folded
        assert_eq!(priority_color("high"), "high");
        assert_eq!(status_color(""), "");
    }

    #[test]
    fn test_badge_color_fallback() {
        assert_eq!(badge_color(BadgeKind::Priority, "Low"), "#bbf7d0");
        assert_eq!(badge_color(BadgeKind::Status, "Archived"), NEUTRAL_BADGE);
    }
}
