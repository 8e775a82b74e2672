use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info_span;

use limpa_cli::config::resolve_config;
use limpa_cli::pipeline::{CleanRequest, clean_file};
use limpa_cli::types::CleanResult;
use limpa_ingest::IngestOptions;
use limpa_model::{DEFAULT_SPECIAL_CHARS, NormalizationConfig};
use limpa_normalization::NormalizationPipeline;

use crate::cli::CleanArgs;
use crate::summary::apply_table_style;

pub fn run_clean(args: &CleanArgs) -> Result<CleanResult> {
    let span = info_span!("clean", input = %args.input.display());
    let _guard = span.enter();

    let config = resolve_config(args.config.as_deref(), &args.overrides())?;
    let request = CleanRequest {
        input: args.input.clone(),
        output: args.output.clone(),
        config,
        ingest: IngestOptions::default().with_max_file_size(args.max_file_size()),
        dry_run: args.dry_run,
    };
    clean_file(&request)
}

pub fn run_defaults() -> Result<()> {
    let config = NormalizationConfig::default();
    let json = serde_json::to_string_pretty(&config).context("serialize default config")?;
    println!("{json}");
    println!();
    println!("Separators: {DEFAULT_SPECIAL_CHARS}");
    println!();

    let pipeline = NormalizationPipeline::from_config(&config).context("build default pipeline")?;
    let mut table = Table::new();
    table.set_header(vec!["#", "Stage"]);
    apply_table_style(&mut table);
    for (position, stage) in pipeline.stages().iter().enumerate() {
        table.add_row(vec![(position + 1).to_string(), stage.label().to_string()]);
    }
    println!("{table}");
    Ok(())
}
