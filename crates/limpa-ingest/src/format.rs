//! Input format detection.

use std::fmt;
use std::path::Path;

use crate::error::{IngestError, Result};

/// Supported input file formats, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    /// First worksheet of an Excel workbook.
    Xlsx,
}

impl InputFormat {
    /// Format for `path`, by case-insensitive extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("csv") {
            Some(Self::Csv)
        } else if ext.eq_ignore_ascii_case("xlsx") {
            Some(Self::Xlsx)
        } else {
            None
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Accept only `.csv` and `.xlsx` files (case-insensitive).
pub fn check_extension(path: &Path) -> Result<InputFormat> {
    InputFormat::from_path(path).ok_or_else(|| IngestError::UnsupportedExtension {
        path: path.to_path_buf(),
    })
}
