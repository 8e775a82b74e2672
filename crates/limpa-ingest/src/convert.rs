//! Conversion from Polars values to dataset cells.

use chrono::NaiveDate;
use polars::prelude::{AnyValue, DataFrame};

use limpa_model::{Cell, Column, Dataset, OpaqueValue};

use crate::error::Result;

/// Days from 0001-01-01 (CE day 1) to 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Convert a single Polars value into a [`Cell`].
///
/// Integers and floats become numbers, strings become text. Booleans and dates
/// are kept as opaque values; any other dtype keeps its display form, as do
/// unsigned integers that do not fit in `i64`.
pub fn any_to_cell(value: AnyValue<'_>) -> Cell {
    match value {
        AnyValue::Null => Cell::Null,
        AnyValue::String(s) => Cell::Text(s.to_string()),
        AnyValue::StringOwned(s) => Cell::Text(s.to_string()),
        AnyValue::Int8(v) => Cell::int(i64::from(v)),
        AnyValue::Int16(v) => Cell::int(i64::from(v)),
        AnyValue::Int32(v) => Cell::int(i64::from(v)),
        AnyValue::Int64(v) => Cell::int(v),
        AnyValue::UInt8(v) => Cell::int(i64::from(v)),
        AnyValue::UInt16(v) => Cell::int(i64::from(v)),
        AnyValue::UInt32(v) => Cell::int(i64::from(v)),
        AnyValue::UInt64(v) => match i64::try_from(v) {
            Ok(v) => Cell::int(v),
            Err(_) => Cell::Other(OpaqueValue::Raw(v.to_string())),
        },
        AnyValue::Float32(v) => Cell::float(f64::from(v)),
        AnyValue::Float64(v) => Cell::float(v),
        AnyValue::Boolean(b) => Cell::Other(OpaqueValue::Boolean(b)),
        AnyValue::Date(days) => match date_from_epoch_days(days) {
            Some(date) => Cell::Other(OpaqueValue::Date(date)),
            None => Cell::Other(OpaqueValue::Raw(days.to_string())),
        },
        other => Cell::Other(OpaqueValue::Raw(other.to_string())),
    }
}

fn date_from_epoch_days(days: i32) -> Option<NaiveDate> {
    days.checked_add(UNIX_EPOCH_DAYS_FROM_CE)
        .and_then(NaiveDate::from_num_days_from_ce_opt)
}

/// Convert a DataFrame into a [`Dataset`], preserving column order.
pub fn dataframe_to_dataset(df: &DataFrame) -> Result<Dataset> {
    let mut columns = Vec::with_capacity(df.width());

    for series in df.get_columns() {
        let mut cells = Vec::with_capacity(series.len());
        for idx in 0..series.len() {
            cells.push(any_to_cell(series.get(idx)?));
        }
        let column = Column::new(series.name().as_str(), cells);
        tracing::trace!(
            column = column.name(),
            dtype = %series.dtype(),
            eligible = column.is_text_eligible(),
            "column converted"
        );
        columns.push(column);
    }

    Ok(Dataset::new(columns)?)
}
