//! Per-run cleaning report.

use serde::{Deserialize, Serialize};

/// What a cleaning run did to one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnReport {
    pub name: String,
    /// Whether the column was text-normalized.
    pub eligible: bool,
    /// Cells whose value or type changed.
    pub rewritten: usize,
    /// Null cells, copied unchanged.
    pub nulls: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanReport {
    pub columns: Vec<ColumnReport>,
    pub rows: usize,
}

impl CleanReport {
    pub fn columns_cleaned(&self) -> usize {
        self.columns.iter().filter(|column| column.eligible).count()
    }

    pub fn columns_skipped(&self) -> usize {
        self.columns.len() - self.columns_cleaned()
    }

    pub fn cells_rewritten(&self) -> usize {
        self.columns.iter().map(|column| column.rewritten).sum()
    }

    pub fn column(&self, name: &str) -> Option<&ColumnReport> {
        self.columns.iter().find(|column| column.name == name)
    }
}
