//! Output generation for cleaned datasets.
//!
//! Writes a [`Dataset`](limpa_model::Dataset) as CSV (through a Polars
//! DataFrame) or as an XLSX workbook, next to the input by default.

mod common;
mod frame;
mod writer;
mod xlsx;

pub use common::{OutputFormat, default_output_path, ensure_parent_dir};
pub use frame::dataset_to_dataframe;
pub use writer::{write_dataset, write_dataset_csv};
pub use xlsx::write_dataset_xlsx;
