//! XLSX writing.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook, Worksheet, XlsxError};

use limpa_model::{Cell, Dataset, Numeric, OpaqueValue};

use crate::common::ensure_parent_dir;

/// Largest integer magnitude an Excel number (an `f64`) holds exactly.
const MAX_EXACT_INTEGER: u64 = 1 << 53;

const SHEET_NAME: &str = "Dados";

/// Write a dataset as a single-sheet XLSX workbook with a header row.
///
/// Integers beyond 2^53 are written as text so no digits are lost. Dates use
/// a `yyyy-mm-dd` number format.
pub fn write_dataset_xlsx(dataset: &Dataset, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;
    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    for (idx, column) in dataset.columns().iter().enumerate() {
        let col = u16::try_from(idx).context("too many columns for an xlsx sheet")?;
        sheet.write_string(0, col, column.name())?;
        for (idx, cell) in column.cells().iter().enumerate() {
            let row = u32::try_from(idx + 1).context("too many rows for an xlsx sheet")?;
            write_cell(sheet, row, col, cell, &date_format)
                .with_context(|| format!("write {} row {row}", column.name()))?;
        }
    }

    ensure_parent_dir(output_path)?;
    workbook
        .save(output_path)
        .with_context(|| format!("write {}", output_path.display()))?;

    tracing::info!(
        path = %output_path.display(),
        columns = dataset.width(),
        rows = dataset.height(),
        format = "xlsx",
        "dataset written"
    );
    Ok(())
}

fn write_cell(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    date_format: &Format,
) -> std::result::Result<(), XlsxError> {
    match cell {
        Cell::Null => {}
        Cell::Text(value) => {
            sheet.write_string(row, col, value)?;
        }
        Cell::Number(Numeric::Int(value)) if value.unsigned_abs() <= MAX_EXACT_INTEGER => {
            sheet.write_number(row, col, *value as f64)?;
        }
        Cell::Number(Numeric::Float(value)) if value.is_finite() => {
            sheet.write_number(row, col, *value)?;
        }
        Cell::Number(value) => {
            sheet.write_string(row, col, value.to_string())?;
        }
        Cell::Other(OpaqueValue::Boolean(value)) => {
            sheet.write_boolean(row, col, *value)?;
        }
        Cell::Other(OpaqueValue::Date(date)) => match excel_date(*date) {
            Some(datetime) => {
                sheet.write_datetime_with_format(row, col, &datetime, date_format)?;
            }
            None => {
                sheet.write_string(row, col, cell.to_string())?;
            }
        },
        Cell::Other(OpaqueValue::Raw(value)) => {
            sheet.write_string(row, col, value)?;
        }
    }
    Ok(())
}

/// Excel dates start at 1900; earlier dates have no serial number.
fn excel_date(date: NaiveDate) -> Option<ExcelDateTime> {
    let year = u16::try_from(date.year())
        .ok()
        .filter(|year| (1900..=9999).contains(year))?;
    let month = u8::try_from(date.month()).ok()?;
    let day = u8::try_from(date.day()).ok()?;
    ExcelDateTime::from_ymd(year, month, day).ok()
}
