use std::path::PathBuf;

use limpa_model::{Dataset, NormalizationConfig};
use limpa_normalization::CleanReport;

/// Outcome of cleaning one input file.
#[derive(Debug, Clone)]
pub struct CleanResult {
    pub input: PathBuf,
    /// Where the cleaned file was written; `None` on a dry run.
    pub output: Option<PathBuf>,
    /// Configuration after defaults, config file and flags were merged.
    pub config: NormalizationConfig,
    pub dataset: Dataset,
    pub report: CleanReport,
}

impl CleanResult {
    pub fn is_dry_run(&self) -> bool {
        self.output.is_none()
    }
}
