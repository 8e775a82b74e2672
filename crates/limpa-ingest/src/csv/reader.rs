//! CSV file reading.

use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

use limpa_model::Dataset;

use crate::convert::dataframe_to_dataset;
use crate::error::{IngestError, Result};
use crate::loader::{IngestOptions, validate_header};

/// Validate DataFrame shape after loading.
///
/// Rejects blank column names and warns about wide datasets.
pub fn validate_dataframe_shape(df: &DataFrame, path: &Path) -> Result<()> {
    validate_header(df.get_column_names().iter().map(|name| name.as_str()), path)
}

/// Read a CSV file into a Polars DataFrame.
///
/// The first row is the header. Guards are not applied here; see
/// [`read_dataset`](crate::read_dataset).
pub fn read_csv_frame(path: &Path, options: &IngestOptions) -> Result<DataFrame> {
    let try_parse_dates = options.try_parse_dates;
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(options.infer_schema_length)
        .map_parse_options(|parse| parse.with_try_parse_dates(try_parse_dates))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Load a CSV file as a [`Dataset`], converting every column cell by cell.
pub fn read_csv_dataset(path: &Path, options: &IngestOptions) -> Result<Dataset> {
    let df = read_csv_frame(path, options)?;
    validate_dataframe_shape(&df, path)?;
    dataframe_to_dataset(&df)
}
