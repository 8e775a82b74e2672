//! Configuration options for text normalization.

use serde::{Deserialize, Serialize};

/// Characters always treated as separators by special-character substitution.
pub const DEFAULT_SPECIAL_CHARS: &str = r#".,;:!?@#$%^&*_+=|\/<>[]{}()-"'`~"#;

/// Options for a cleaning run.
///
/// Every field has a default, so a partial JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationConfig {
    /// Lowercase text.
    pub lowercase: bool,

    /// Fold diacritics and replace special characters with spaces.
    pub strip_special: bool,

    /// Insert a space wherever a digit meets a letter.
    pub split_alnum_boundary: bool,

    /// Collapse whitespace runs to one space and trim.
    pub collapse_whitespace: bool,

    /// Extra literal separator characters, added to [`DEFAULT_SPECIAL_CHARS`].
    pub extra_chars: String,

    /// Diacritic folding override. `None` follows `strip_special`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fold_diacritics: Option<bool>,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            strip_special: true,
            split_alnum_boundary: true,
            collapse_whitespace: true,
            extra_chars: String::new(),
            fold_diacritics: None,
        }
    }
}

impl NormalizationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Config with every stage turned off; cleaning only re-types `Other`
    /// cells in eligible columns as text.
    pub fn disabled() -> Self {
        Self {
            lowercase: false,
            strip_special: false,
            split_alnum_boundary: false,
            collapse_whitespace: false,
            extra_chars: String::new(),
            fold_diacritics: None,
        }
    }

    pub fn with_lowercase(mut self, enable: bool) -> Self {
        self.lowercase = enable;
        self
    }

    pub fn with_strip_special(mut self, enable: bool) -> Self {
        self.strip_special = enable;
        self
    }

    pub fn with_split_alnum_boundary(mut self, enable: bool) -> Self {
        self.split_alnum_boundary = enable;
        self
    }

    pub fn with_collapse_whitespace(mut self, enable: bool) -> Self {
        self.collapse_whitespace = enable;
        self
    }

    pub fn with_extra_chars(mut self, chars: impl Into<String>) -> Self {
        self.extra_chars = chars.into();
        self
    }

    pub fn with_fold_diacritics(mut self, enable: bool) -> Self {
        self.fold_diacritics = Some(enable);
        self
    }

    /// Whether diacritic folding runs, after applying the override.
    pub fn folds_diacritics(&self) -> bool {
        self.fold_diacritics.unwrap_or(self.strip_special)
    }
}
