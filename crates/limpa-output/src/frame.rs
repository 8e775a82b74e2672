//! Dataset to DataFrame conversion.

use anyhow::{Context, Result};
use polars::prelude::{Column as FrameColumn, DataFrame, NamedFrom, Series};

use limpa_model::{Column, Dataset, Numeric};

/// Build a DataFrame from a dataset.
///
/// Integer columns become `Int64` and other numeric columns `Float64`; every
/// other column is written as strings using each cell's display form. `Null`
/// cells stay null.
pub fn dataset_to_dataframe(dataset: &Dataset) -> Result<DataFrame> {
    let columns: Vec<FrameColumn> = dataset.columns().iter().map(column_to_frame).collect();
    DataFrame::new(columns).context("build dataframe from dataset")
}

fn column_to_frame(column: &Column) -> FrameColumn {
    if column.is_integer() {
        let values: Vec<Option<i64>> = column
            .cells()
            .iter()
            .map(|cell| cell.as_number().and_then(Numeric::as_int))
            .collect();
        Series::new(column.name().into(), values).into()
    } else if column.is_numeric() {
        let values: Vec<Option<f64>> = column
            .cells()
            .iter()
            .map(|cell| cell.as_number().map(Numeric::as_f64))
            .collect();
        Series::new(column.name().into(), values).into()
    } else {
        let values: Vec<Option<String>> = column
            .cells()
            .iter()
            .map(|cell| (!cell.is_null()).then(|| cell.to_string()))
            .collect();
        Series::new(column.name().into(), values).into()
    }
}
