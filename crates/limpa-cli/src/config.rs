//! Cleaning configuration resolution.
//!
//! Precedence, lowest to highest: built-in defaults, a JSON config file,
//! explicit command-line flags.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use limpa_model::NormalizationConfig;

/// Field overrides collected from command-line flags. `None` keeps the value
/// from the lower layers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub lowercase: Option<bool>,
    pub strip_special: Option<bool>,
    pub split_alnum_boundary: Option<bool>,
    pub collapse_whitespace: Option<bool>,
    pub fold_diacritics: Option<bool>,
    pub extra_chars: Option<String>,
}

impl ConfigOverrides {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Apply every set override on top of `config`.
    pub fn apply(&self, mut config: NormalizationConfig) -> NormalizationConfig {
        if let Some(enable) = self.lowercase {
            config.lowercase = enable;
        }
        if let Some(enable) = self.strip_special {
            config.strip_special = enable;
        }
        if let Some(enable) = self.split_alnum_boundary {
            config.split_alnum_boundary = enable;
        }
        if let Some(enable) = self.collapse_whitespace {
            config.collapse_whitespace = enable;
        }
        if let Some(enable) = self.fold_diacritics {
            config.fold_diacritics = Some(enable);
        }
        if let Some(chars) = &self.extra_chars {
            config.extra_chars.clone_from(chars);
        }
        config
    }
}

/// Load a JSON config file. Missing fields take their defaults.
pub fn load_config_file(path: &Path) -> Result<NormalizationConfig> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse config {}", path.display()))
}

/// Merge defaults, an optional config file and flag overrides.
pub fn resolve_config(
    file: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<NormalizationConfig> {
    let base = match file {
        Some(path) => load_config_file(path)?,
        None => NormalizationConfig::default(),
    };
    let config = overrides.apply(base);
    tracing::debug!(
        config_file = ?file,
        overrides = !overrides.is_empty(),
        ?config,
        "configuration resolved"
    );
    Ok(config)
}
