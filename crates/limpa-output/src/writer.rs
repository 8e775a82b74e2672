//! Dataset writing.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{CsvWriter, SerWriter};

use limpa_model::Dataset;

use crate::common::{OutputFormat, ensure_parent_dir};
use crate::frame::dataset_to_dataframe;
use crate::xlsx::write_dataset_xlsx;

/// Write a dataset in the format named by the output extension.
///
/// `.xlsx` paths get a workbook with a single sheet; every other path gets CSV.
pub fn write_dataset(dataset: &Dataset, output_path: &Path) -> Result<()> {
    match OutputFormat::from_path(output_path) {
        OutputFormat::Csv => write_dataset_csv(dataset, output_path),
        OutputFormat::Xlsx => write_dataset_xlsx(dataset, output_path),
    }
}

/// Write a dataset as a CSV file with a header row.
///
/// Parent directories are created as needed and an existing file is
/// overwritten.
pub fn write_dataset_csv(dataset: &Dataset, output_path: &Path) -> Result<()> {
    let mut df = dataset_to_dataframe(dataset)?;

    ensure_parent_dir(output_path)?;
    let mut file =
        File::create(output_path).with_context(|| format!("create {}", output_path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("write {}", output_path.display()))?;

    tracing::info!(
        path = %output_path.display(),
        columns = dataset.width(),
        rows = dataset.height(),
        format = "csv",
        "dataset written"
    );
    Ok(())
}
