//! Guarded loading of any supported input file.

use std::path::Path;

use limpa_model::Dataset;

use crate::csv::read_csv_dataset;
use crate::error::{IngestError, Result};
use crate::format::{InputFormat, check_extension};
use crate::xlsx::read_xlsx_dataset;

/// Maximum accepted input size (10 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Width above which a dataset is logged as unusually wide.
const WIDE_DATASET_COLUMNS: usize = 500;

/// Options for reading a dataset from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestOptions {
    /// Files larger than this many bytes are rejected before parsing.
    pub max_file_size: u64,
    /// CSV rows scanned for schema inference. `None` scans the whole file.
    pub infer_schema_length: Option<usize>,
    /// Parse ISO-like CSV date columns into dates instead of strings.
    pub try_parse_dates: bool,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            infer_schema_length: Some(100),
            try_parse_dates: true,
        }
    }
}

impl IngestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    pub fn with_infer_schema_length(mut self, rows: Option<usize>) -> Self {
        self.infer_schema_length = rows;
        self
    }

    pub fn with_try_parse_dates(mut self, enable: bool) -> Self {
        self.try_parse_dates = enable;
        self
    }
}

/// Check file size against a limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Reject blank column names and warn about very wide headers.
pub fn validate_header<'a>(names: impl IntoIterator<Item = &'a str>, path: &Path) -> Result<()> {
    let mut width = 0usize;
    for name in names {
        if name.trim().is_empty() {
            return Err(IngestError::EmptyColumnName {
                path: path.to_path_buf(),
            });
        }
        width += 1;
    }

    if width > WIDE_DATASET_COLUMNS {
        tracing::warn!(
            path = %path.display(),
            columns = width,
            "dataset has more than {WIDE_DATASET_COLUMNS} columns"
        );
    }

    Ok(())
}

/// Load a CSV or XLSX file as a [`Dataset`].
///
/// Checks the extension and size limit before parsing, then hands off to the
/// reader for the detected format.
pub fn read_dataset(path: &Path, options: &IngestOptions) -> Result<Dataset> {
    let span = tracing::info_span!("ingest", path = %path.display());
    let _guard = span.enter();

    let format = check_extension(path)?;
    check_file_size_with_limit(path, options.max_file_size)?;

    let dataset = match format {
        InputFormat::Csv => read_csv_dataset(path, options)?,
        InputFormat::Xlsx => read_xlsx_dataset(path)?,
    };

    tracing::info!(
        %format,
        columns = dataset.width(),
        rows = dataset.height(),
        "dataset loaded"
    );
    Ok(dataset)
}
