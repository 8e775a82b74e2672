//! Text normalization for tabular data.
//!
//! Cleans free-text columns of a [`Dataset`](limpa_model::Dataset) so values
//! can be matched, deduplicated or reported on.
//!
//! # Overview
//!
//! - **Stages**: five pure `&str -> String` transforms in [`normalization`]
//!   (case folding, diacritic folding, special-character substitution,
//!   digit/letter boundary splitting, whitespace collapsing)
//! - **Pipeline**: [`NormalizationPipeline`] compiles a
//!   [`NormalizationConfig`](limpa_model::NormalizationConfig) into the ordered
//!   list of enabled stages
//! - **Execution**: [`clean`] applies the pipeline to every eligible column and
//!   returns a new dataset
//!
//! # Example
//!
//! ```
//! use limpa_model::{Cell, Column, Dataset, NormalizationConfig};
//! use limpa_normalization::clean;
//!
//! let dataset = Dataset::new(vec![
//!     Column::new("Descricao", vec![Cell::text("Produto Nº 10kg"), Cell::Null]),
//!     Column::new("Peso", vec![Cell::float(1.5), Cell::float(3.2)]),
//! ])?;
//!
//! let cleaned = clean(&dataset, &NormalizationConfig::default())?;
//! let descricao = cleaned.column("Descricao").unwrap();
//! assert_eq!(descricao.cells(), &[Cell::text("produto n 10 kg"), Cell::Null]);
//! assert_eq!(cleaned.column("Peso"), dataset.column("Peso"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Design Principles
//!
//! - **Null-safe**: `Null` cells are copied before any string operation
//! - **Classified once**: column eligibility is decided per column, not per cell
//! - **Literal separators**: user-supplied characters are always escaped

mod error;
mod executor;
mod report;
mod types;

pub mod normalization;

// Core types
pub use types::{NormalizationPipeline, NormalizationStage};

// Error type
pub use error::{NormalizationError, Result};

// Execution
pub use executor::{CleanOutcome, clean, clean_with_report};

// Run report
pub use report::{CleanReport, ColumnReport};

// Classification lives with the model; re-exported for diagnostics.
pub use limpa_model::classify;
