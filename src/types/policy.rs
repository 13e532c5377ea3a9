use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::color::{self, BadgeKind};
use crate::error::{Result, SheetError};
use crate::hyperlinks;
use crate::numfmt;

/// How cells of a column are displayed and edited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CellPolicy {
    #[default]
    PlainText,
    /// `dd-mm-yyyy` text edited through a date picker.
    Date,
    /// Status label shown as a colored badge.
    Status,
    /// Priority label shown as a colored badge.
    Priority,
    /// Integer amount shown with thousands separators.
    Currency,
    /// Web address shown as a link.
    Url,
}

/// Which input control edits a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EditorKind {
    Text,
    Date,
}

/// Render-ready form of a cell value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CellDisplay {
    Text { text: String },
    Badge { label: String, color: String },
    Link { text: String, href: String },
}

impl CellDisplay {
    fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}

impl CellPolicy {
    pub fn editor(self) -> EditorKind {
        match self {
            Self::Date => EditorKind::Date,
            _ => EditorKind::Text,
        }
    }

    /// Display form of `value`. Empty cells always render as empty text.
    pub fn display(self, value: &str) -> CellDisplay {
        if value.is_empty() {
            return CellDisplay::text("");
        }
        match self {
            Self::PlainText | Self::Date => CellDisplay::text(value),
            Self::Currency => CellDisplay::text(numfmt::group_thousands(value)),
            Self::Status => CellDisplay::Badge {
                label: value.to_string(),
                color: color::badge_color(BadgeKind::Status, value).to_string(),
            },
            Self::Priority => CellDisplay::Badge {
                label: value.to_string(),
                color: color::badge_color(BadgeKind::Priority, value).to_string(),
            },
            Self::Url => match hyperlinks::link_href(value) {
                Some(href) => CellDisplay::Link {
                    text: value.to_string(),
                    href,
                },
                None => CellDisplay::text(value),
            },
        }
    }
}

/// Column name -> [`CellPolicy`]. Columns not listed are plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnPolicies {
    by_name: HashMap<String, CellPolicy>,
}

impl Default for ColumnPolicies {
    /// Policies for the sample job-tracker sheet.
    fn default() -> Self {
        Self::from_pairs([
            ("Submitted", CellPolicy::Date),
            ("Due Date", CellPolicy::Date),
            ("Status", CellPolicy::Status),
            ("Priority", CellPolicy::Priority),
            ("URL", CellPolicy::Url),
            ("Est. Value", CellPolicy::Currency),
        ])
    }
}

impl ColumnPolicies {
    /// No special columns; everything is plain text.
    pub fn plain() -> Self {
        Self {
            by_name: HashMap::new(),
        }
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, CellPolicy)>) -> Self {
        Self {
            by_name: pairs
                .into_iter()
                .map(|(name, policy)| (name.to_string(), policy))
                .collect(),
        }
    }

    /// Parse a JSON object such as `{"Due": "date", "State": "status"}`.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SheetError::Config(e.to_string()))
    }

    pub fn set(&mut self, column: &str, policy: CellPolicy) {
        self.by_name.insert(column.to_string(), policy);
    }

    pub fn policy_for(&self, column: &str) -> CellPolicy {
        self.by_name.get(column).copied().unwrap_or_default()
    }
}
