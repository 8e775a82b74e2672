//! Normalization stages.
//!
//! Each stage is a pure function over one text value. The pipeline in
//! [`crate::NormalizationPipeline`] runs them in a fixed order.

mod boundary;
mod case;
mod diacritics;
mod specials;
mod whitespace;

pub use boundary::split_alnum_boundary;
pub use case::fold_case;
pub use diacritics::fold_diacritics;
pub use specials::{SpecialCharClass, substitute_specials};
pub use whitespace::collapse_whitespace;
