//! Load, clean and write one file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info_span;

use limpa_ingest::{IngestOptions, read_dataset};
use limpa_model::NormalizationConfig;
use limpa_normalization::clean_with_report;
use limpa_output::{default_output_path, write_dataset};

use crate::types::CleanResult;

/// Everything needed to process one input file.
#[derive(Debug, Clone)]
pub struct CleanRequest {
    pub input: PathBuf,
    /// Output path; defaults to `<stem>_processados.<ext>` next to the input.
    pub output: Option<PathBuf>,
    pub config: NormalizationConfig,
    pub ingest: IngestOptions,
    /// Clean and report without writing anything.
    pub dry_run: bool,
}

impl CleanRequest {
    pub fn new(input: impl Into<PathBuf>, config: NormalizationConfig) -> Self {
        Self {
            input: input.into(),
            output: None,
            config,
            ingest: IngestOptions::default(),
            dry_run: false,
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input))
    }
}

/// Run ingest, cleaning and output for a single file.
pub fn clean_file(request: &CleanRequest) -> Result<CleanResult> {
    let span = info_span!("clean_file", input = %request.input.display());
    let _guard = span.enter();

    let dataset = read_dataset(&request.input, &request.ingest)
        .with_context(|| format!("load {}", request.input.display()))?;
    let outcome = clean_with_report(&dataset, &request.config)
        .with_context(|| format!("clean {}", request.input.display()))?;

    let output = if request.dry_run {
        tracing::info!("dry run, output not written");
        None
    } else {
        let path = request.output_path();
        write_dataset(&outcome.dataset, &path)?;
        Some(path)
    };

    Ok(CleanResult {
        input: request.input.clone(),
        output,
        config: request.config.clone(),
        dataset: outcome.dataset,
        report: outcome.report,
    })
}
