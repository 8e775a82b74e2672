//! Tabular data model for the limpador text cleaner.
//!
//! A [`Dataset`] is an ordered set of named [`Column`]s of equal length. Each
//! column carries its cells and a text-eligibility flag computed once by
//! [`classify`] when the column is built. [`NormalizationConfig`] describes
//! which normalization stages a cleaning run applies.

pub mod cell;
pub mod column;
pub mod dataset;
pub mod error;
pub mod options;

pub use cell::{Cell, Numeric, OpaqueValue, format_numeric};
pub use column::{Column, classify};
pub use dataset::Dataset;
pub use error::{ModelError, Result};
pub use options::{DEFAULT_SPECIAL_CHARS, NormalizationConfig};
