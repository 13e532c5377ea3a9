use serde::{Deserialize, Serialize};

use crate::cell_ref::CellAddress;

/// Number of rows the sample sheet is padded to.
pub const SEED_ROW_COUNT: usize = 50;

/// The authoritative grid value: ordered column names and rows of string cells.
///
/// Tables built through this crate are rectangular (every row has one cell per
/// column). The exception is CSV import, which keeps ragged rows as parsed, so
/// readers treat a missing cell as `""` rather than assuming the invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    /// An all-empty table with the given headers.
    pub fn blank(columns: Vec<String>, row_count: usize) -> Self {
        let width = columns.len();
        Self {
            columns,
            rows: vec![vec![String::new(); width]; row_count],
        }
    }

    /// An all-empty table with `Item 1`..`Item n` headers.
    pub fn items(col_count: usize, row_count: usize) -> Self {
        let columns = (1..=col_count).map(|i| format!("Item {i}")).collect();
        Self::blank(columns, row_count)
    }

    /// The sample job-tracker sheet, padded with empty rows.
    pub fn seed() -> Self {
        let columns: Vec<String> = SEED_COLUMNS.iter().map(|c| (*c).to_string()).collect();
        let width = columns.len();
        let mut rows: Vec<Vec<String>> = SEED_ROWS
            .iter()
            .map(|row| row.iter().map(|c| (*c).to_string()).collect())
            .collect();
        rows.resize(SEED_ROW_COUNT, vec![String::new(); width]);
        Self { columns, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.columns.len()
    }

    /// Cell text at `addr`, or `None` when the address is outside the row.
    pub fn cell(&self, addr: CellAddress) -> Option<&str> {
        self.rows
            .get(addr.row)
            .and_then(|r| r.get(addr.col))
            .map(String::as_str)
    }

    /// Cell text at `addr`, reading missing cells as empty.
    pub fn cell_or_empty(&self, addr: CellAddress) -> &str {
        self.cell(addr).unwrap_or("")
    }

    pub fn column_name(&self, col: usize) -> Option<&str> {
        self.columns.get(col).map(String::as_str)
    }

    /// Whether every row has exactly one cell per column.
    pub fn is_rectangular(&self) -> bool {
        let width = self.columns.len();
        self.rows.iter().all(|r| r.len() == width)
    }
}

const SEED_COLUMNS: [&str; 9] = [
    "Job Request",
    "Submitted",
    "Status",
    "Submitter",
    "URL",
    "Assigned",
    "Priority",
    "Due Date",
    "Est. Value",
];

const SEED_ROWS: [[&str; 9]; 5] = [
    [
        "Launch social media campaign for product",
        "15-11-2024",
        "In-process",
        "Aisha Patel",
        "www.aishapatel.com",
        "Sophie Choudhury",
        "Medium",
        "20-11-2024",
        "6200000",
    ],
    [
        "Update press kit for company redesign",
        "30-10-2024",
        "Need to start",
        "Irfan Khan",
        "www.irfankhan.com",
        "Tejas Pandey",
        "High",
        "30-10-2024",
        "3500000",
    ],
    [
        "Finalize user testing feedback for app",
        "05-12-2024",
        "In-process",
        "Mark Johnson",
        "www.markjohnson.com",
        "Rachel Lee",
        "Medium",
        "10-12-2024",
        "4750000",
    ],
    [
        "Design new features for the website",
        "10-01-2025",
        "Complete",
        "Emily Green",
        "www.emilygreen.com",
        "Tom Wright",
        "Low",
        "15-01-2025",
        "5900000",
    ],
    [
        "Prepare financial report for Q4",
        "25-01-2025",
        "Blocked",
        "Jessica Brown",
        "www.jessicabrown.com",
        "Kevin Smith",
        "Low",
        "30-01-2025",
        "2800000",
    ],
];
