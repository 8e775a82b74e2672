//! Dataset cleaning execution.
//!
//! Runs a compiled [`NormalizationPipeline`] over every text-eligible column
//! of a dataset and returns a new dataset. The input is never mutated.

use limpa_model::{Cell, Column, Dataset, NormalizationConfig};

use crate::error::{NormalizationError, Result};
use crate::report::{CleanReport, ColumnReport};
use crate::types::NormalizationPipeline;

/// Cleaned dataset plus what happened to each column.
#[derive(Debug, Clone)]
pub struct CleanOutcome {
    pub dataset: Dataset,
    pub report: CleanReport,
}

/// Clean every eligible column of `dataset`.
///
/// Ineligible columns and `Null` cells are copied unchanged. Other cells are
/// converted to text and run through the stages enabled by `config`.
pub fn clean(dataset: &Dataset, config: &NormalizationConfig) -> Result<Dataset> {
    clean_with_report(dataset, config).map(|outcome| outcome.dataset)
}

/// Same as [`clean`], also returning a per-column report.
pub fn clean_with_report(
    dataset: &Dataset,
    config: &NormalizationConfig,
) -> Result<CleanOutcome> {
    let span = tracing::info_span!(
        "clean",
        columns = dataset.width(),
        rows = dataset.height()
    );
    let _guard = span.enter();

    let pipeline = NormalizationPipeline::from_config(config)?;

    let mut columns = Vec::with_capacity(dataset.width());
    let mut report = CleanReport {
        columns: Vec::with_capacity(dataset.width()),
        rows: dataset.height(),
    };

    for column in dataset.columns() {
        let (cleaned, column_report) = clean_column(column, &pipeline)?;
        tracing::debug!(
            column = %column_report.name,
            eligible = column_report.eligible,
            rewritten = column_report.rewritten,
            nulls = column_report.nulls,
            "column processed"
        );
        columns.push(cleaned);
        report.columns.push(column_report);
    }

    let dataset = Dataset::new(columns)?;

    tracing::info!(
        columns_cleaned = report.columns_cleaned(),
        columns_skipped = report.columns_skipped(),
        cells_rewritten = report.cells_rewritten(),
        "cleaning complete"
    );

    Ok(CleanOutcome { dataset, report })
}

/// Clean one column, or copy it when it is not text-eligible.
fn clean_column(
    column: &Column,
    pipeline: &NormalizationPipeline,
) -> Result<(Column, ColumnReport)> {
    let nulls = column.null_count();

    if !column.is_text_eligible() {
        let report = ColumnReport {
            name: column.name().to_string(),
            eligible: false,
            rewritten: 0,
            nulls,
        };
        return Ok((column.clone(), report));
    }

    let mut cells = Vec::with_capacity(column.len());
    let mut rewritten = 0usize;

    for (row, cell) in column.cells().iter().enumerate() {
        let cleaned = match cell {
            Cell::Null => Cell::Null,
            Cell::Number(_) => {
                return Err(NormalizationError::TypeMismatch {
                    column: column.name().to_string(),
                    row,
                    found: cell.kind(),
                });
            }
            Cell::Text(value) => Cell::Text(pipeline.apply(value)),
            Cell::Other(value) => Cell::Text(pipeline.apply(&value.to_string())),
        };
        if &cleaned != cell {
            rewritten += 1;
        }
        cells.push(cleaned);
    }

    let report = ColumnReport {
        name: column.name().to_string(),
        eligible: true,
        rewritten,
        nulls,
    };
    Ok((Column::new(column.name(), cells), report))
}
