//! Core types for the normalization pipeline.

use std::fmt;

use limpa_model::NormalizationConfig;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::normalization::{
    SpecialCharClass, collapse_whitespace, fold_case, fold_diacritics, split_alnum_boundary,
};

/// One text transform. Variants are declared in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NormalizationStage {
    /// Lowercase.
    CaseFold,
    /// NFKD, drop combining marks, `ç` → `c`.
    DiacriticFold,
    /// Default and extra separator characters become spaces.
    SpecialChars,
    /// Space between digits and letters.
    AlnumBoundary,
    /// Collapse whitespace runs and trim.
    Whitespace,
}

impl NormalizationStage {
    pub fn label(self) -> &'static str {
        match self {
            Self::CaseFold => "case folding",
            Self::DiacriticFold => "diacritic folding",
            Self::SpecialChars => "special characters",
            Self::AlnumBoundary => "digit/letter split",
            Self::Whitespace => "whitespace collapse",
        }
    }
}

impl fmt::Display for NormalizationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A config compiled into the ordered stages it enables.
///
/// Compilation validates `extra_chars`, so an invalid config fails before any
/// cell is touched.
#[derive(Debug, Clone)]
pub struct NormalizationPipeline {
    stages: Vec<NormalizationStage>,
    specials: SpecialCharClass,
}

impl NormalizationPipeline {
    pub fn from_config(config: &NormalizationConfig) -> Result<Self> {
        let specials = SpecialCharClass::new(&config.extra_chars)?;

        let mut stages = Vec::with_capacity(5);
        if config.lowercase {
            stages.push(NormalizationStage::CaseFold);
        }
        if config.folds_diacritics() {
            stages.push(NormalizationStage::DiacriticFold);
        }
        if config.strip_special {
            stages.push(NormalizationStage::SpecialChars);
        }
        if config.split_alnum_boundary {
            stages.push(NormalizationStage::AlnumBoundary);
        }
        if config.collapse_whitespace {
            stages.push(NormalizationStage::Whitespace);
        }

        tracing::debug!(
            stages = ?stages,
            extra_chars = config.extra_chars.chars().count(),
            "compiled normalization pipeline"
        );

        Ok(Self { stages, specials })
    }

    pub fn stages(&self) -> &[NormalizationStage] {
        &self.stages
    }

    pub fn is_enabled(&self, stage: NormalizationStage) -> bool {
        self.stages.contains(&stage)
    }

    /// Run every enabled stage over `text`.
    pub fn apply(&self, text: &str) -> String {
        let mut value = text.to_string();
        for stage in &self.stages {
            value = match stage {
                NormalizationStage::CaseFold => fold_case(&value),
                NormalizationStage::DiacriticFold => fold_diacritics(&value),
                NormalizationStage::SpecialChars => self.specials.substitute(&value),
                NormalizationStage::AlnumBoundary => split_alnum_boundary(&value),
                NormalizationStage::Whitespace => collapse_whitespace(&value),
            };
        }
        value
    }
}
