use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Suffix appended to the input stem for the default output file.
const OUTPUT_SUFFIX: &str = "_processados";

/// File formats the cleaned dataset can be written as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Xlsx,
}

impl OutputFormat {
    /// `.xlsx` (any case) writes a workbook; anything else writes CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("xlsx") => Self::Xlsx,
            _ => Self::Csv,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
        }
    }
}

/// Default output location: `<input dir>/<stem>_processados.<ext>`, keeping
/// the input's format.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use limpa_output::default_output_path;
///
/// assert_eq!(
///     default_output_path(Path::new("data/dados.csv")),
///     PathBuf::from("data/dados_processados.csv")
/// );
/// ```
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "dados".into(), |stem| stem.to_string_lossy());
    let ext = OutputFormat::from_path(input).extension();
    input.with_file_name(format!("{stem}{OUTPUT_SUFFIX}.{ext}"))
}

/// Create the parent directory of `path` if needed.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    Ok(())
}
