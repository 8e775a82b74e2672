//! Named columns and text-eligibility classification.

use serde::{Deserialize, Serialize};

use crate::cell::{Cell, Numeric};

/// Decide whether a column of cells behaves as free text.
///
/// A column is eligible when it holds at least one `Text` cell and no `Number`
/// cell. All-null and all-`Other` columns are not eligible, so numeric and
/// temporal data is never stringified.
///
/// # Examples
///
/// ```
/// use limpa_model::{Cell, classify};
///
/// assert!(classify(&[Cell::text("a"), Cell::Null]));
/// assert!(!classify(&[Cell::text("a"), Cell::float(1.0)]));
/// assert!(!classify(&[Cell::Null, Cell::Null]));
/// ```
pub fn classify(cells: &[Cell]) -> bool {
    let mut has_text = false;
    for cell in cells {
        match cell {
            Cell::Number(_) => return false,
            Cell::Text(_) => has_text = true,
            Cell::Null | Cell::Other(_) => {}
        }
    }
    has_text
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    cells: Vec<Cell>,
    is_text_eligible: bool,
}

impl Column {
    /// Build a column and classify it.
    pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        let is_text_eligible = classify(&cells);
        Self {
            name: name.into(),
            cells,
            is_text_eligible,
        }
    }

    /// Build a column with an eligibility flag supplied by a collaborator that
    /// already knows the column's schema. The cleaner checks every cell
    /// against this flag.
    pub fn with_eligibility(
        name: impl Into<String>,
        cells: Vec<Cell>,
        is_text_eligible: bool,
    ) -> Self {
        Self {
            name: name.into(),
            cells,
            is_text_eligible,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self, row: usize) -> Option<&Cell> {
        self.cells.get(row)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn is_text_eligible(&self) -> bool {
        self.is_text_eligible
    }

    pub fn null_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_null()).count()
    }

    /// True when every non-null cell is an integer (and there is at least one).
    pub fn is_integer(&self) -> bool {
        self.is_numeric()
            && self
                .cells
                .iter()
                .all(|cell| !matches!(cell, Cell::Number(Numeric::Float(_))))
    }

    /// True when every non-null cell is a number (and there is at least one).
    pub fn is_numeric(&self) -> bool {
        let mut seen = false;
        for cell in &self.cells {
            match cell {
                Cell::Null => {}
                Cell::Number(_) => seen = true,
                _ => return false,
            }
        }
        seen
    }
}
