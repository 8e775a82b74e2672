//! Error types for text normalization.

use limpa_model::ModelError;
use thiserror::Error;

/// Errors raised by a cleaning run.
#[derive(Debug, Error)]
pub enum NormalizationError {
    /// A cell contradicts its column's classification.
    #[error("column '{column}' row {row}: {found} cell in a text column")]
    TypeMismatch {
        column: String,
        row: usize,
        found: &'static str,
    },

    /// `extra_chars` holds a code point that cannot stand alone in a
    /// character class.
    #[error("invalid extra character {character:?}: {reason}")]
    InvalidConfig {
        character: char,
        reason: &'static str,
    },

    /// The separator pattern failed to compile.
    #[error("failed to build separator pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The cleaned columns did not form a valid dataset.
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Result type for normalization operations.
pub type Result<T> = std::result::Result<T, NormalizationError>;
