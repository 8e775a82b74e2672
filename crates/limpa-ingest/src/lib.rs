//! Tabular data ingestion.
//!
//! Reads CSV files (through Polars) and XLSX workbooks (through calamine) into the
//! [`Dataset`](limpa_model::Dataset) model consumed by the cleaner.
//!
//! # Features
//!
//! - **Guards**: extension allow-list and file size limit before parsing
//! - **CSV Loading**: header row plus schema inference, optional date parsing
//! - **XLSX Loading**: first worksheet, first row as header
//! - **Cell Conversion**: Polars `AnyValue` and calamine `Data` to [`Cell`](limpa_model::Cell)
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use limpa_ingest::{IngestOptions, read_dataset};
//!
//! let dataset = read_dataset(Path::new("dados.csv"), &IngestOptions::default())?;
//! ```

mod convert;
mod csv;
mod error;
mod format;
mod loader;
mod xlsx;

// === Error Types ===
pub use error::{IngestError, Result};

// === Loading ===
pub use format::{InputFormat, check_extension};
pub use loader::{
    DEFAULT_MAX_FILE_SIZE, IngestOptions, check_file_size_with_limit, read_dataset,
    validate_header,
};

// === CSV Reading ===
pub use csv::{read_csv_dataset, read_csv_frame, validate_dataframe_shape};

// === XLSX Reading ===
pub use xlsx::{data_to_cell, read_xlsx_dataset};

// === Conversion ===
pub use convert::{any_to_cell, dataframe_to_dataset};
