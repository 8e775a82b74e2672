//! First-worksheet XLSX reading.

use std::path::Path;

use calamine::{Data, DataType, Reader, Xlsx, open_workbook};
use chrono::NaiveTime;

use limpa_model::{Cell, Column, Dataset, OpaqueValue};

use crate::error::{IngestError, Result};
use crate::loader::validate_header;

/// Largest magnitude at which every whole `f64` is an exact integer (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Convert one worksheet value into a [`Cell`].
///
/// Excel stores every number as a float; whole values within the exact range
/// come back as integers. Midnight date-times become dates.
pub fn data_to_cell(value: &Data) -> Cell {
    match value {
        Data::Empty => Cell::Null,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Int(v) => Cell::int(*v),
        Data::Float(v) => float_to_cell(*v),
        Data::Bool(b) => Cell::Other(OpaqueValue::Boolean(*b)),
        Data::DateTime(_) => match value.as_datetime() {
            Some(dt) if dt.time() == NaiveTime::MIN => Cell::Other(OpaqueValue::Date(dt.date())),
            Some(dt) => Cell::Other(OpaqueValue::Raw(
                dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            )),
            None => Cell::Other(OpaqueValue::Raw(value.to_string())),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Other(OpaqueValue::Raw(s.clone())),
        Data::Error(e) => Cell::Other(OpaqueValue::Raw(e.to_string())),
    }
}

fn float_to_cell(value: f64) -> Cell {
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        Cell::int(value as i64)
    } else {
        Cell::float(value)
    }
}

/// Load the first worksheet of an XLSX workbook as a [`Dataset`].
///
/// The first row is the header; every following row is data.
pub fn read_xlsx_dataset(path: &Path) -> Result<Dataset> {
    let sheet_error = |message: String| IngestError::SheetRead {
        path: path.to_path_buf(),
        message,
    };

    let mut workbook: Xlsx<std::io::BufReader<std::fs::File>> = open_workbook(path).map_err(|e: calamine::XlsxError| sheet_error(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::EmptySheet {
            path: path.to_path_buf(),
        })?
        .map_err(|e| sheet_error(e.to_string()))?;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Err(IngestError::EmptySheet {
            path: path.to_path_buf(),
        });
    };
    let names: Vec<String> = header.iter().map(ToString::to_string).collect();
    validate_header(names.iter().map(String::as_str), path)?;

    let height = range.height().saturating_sub(1);
    let mut cells: Vec<Vec<Cell>> = (0..names.len())
        .map(|_| Vec::with_capacity(height))
        .collect();
    for row in rows {
        for (column, value) in cells.iter_mut().zip(row) {
            column.push(data_to_cell(value));
        }
    }

    let columns = names
        .into_iter()
        .zip(cells)
        .map(|(name, cells)| Column::new(name, cells))
        .collect();
    Ok(Dataset::new(columns)?)
}
