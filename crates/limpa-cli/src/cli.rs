//! CLI argument definitions for limpador.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use limpa_cli::config::ConfigOverrides;
use limpa_cli::logging::LogFormat;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "limpador",
    version,
    about = "Column-aware text cleaning for tabular data",
    long_about = "Clean the free-text columns of a CSV or XLSX file.\n\n\
                  Text columns are lowercased, stripped of accents and special\n\
                  characters, split at digit/letter boundaries and whitespace-collapsed.\n\
                  Numeric, date and empty columns are left untouched."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean the text columns of a CSV or XLSX file.
    Clean(CleanArgs),

    /// Print the default configuration and separator set.
    Defaults,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// CSV or XLSX file to clean.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output path; `.xlsx` writes a workbook, anything else CSV
    /// (default: <INPUT stem>_processados.<ext> next to the input).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// JSON configuration file; flags override its values.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Keep the original letter case.
    #[arg(long = "no-lowercase")]
    pub no_lowercase: bool,

    /// Keep special characters (also keeps accents unless overridden).
    #[arg(long = "no-strip-special")]
    pub no_strip_special: bool,

    /// Do not insert spaces between digits and letters.
    #[arg(long = "no-split-alnum")]
    pub no_split_alnum: bool,

    /// Keep whitespace runs and surrounding spaces.
    #[arg(long = "no-collapse-whitespace")]
    pub no_collapse_whitespace: bool,

    /// Keep accents even when special characters are stripped.
    #[arg(long = "keep-diacritics")]
    pub keep_diacritics: bool,

    /// Extra characters to treat as separators, e.g. "€§".
    #[arg(long = "extra-chars", value_name = "CHARS")]
    pub extra_chars: Option<String>,

    /// Reject inputs larger than this many megabytes.
    #[arg(long = "max-size-mb", value_name = "N", default_value_t = 10)]
    pub max_size_mb: u64,

    /// Rows of cleaned data to preview (0 disables the preview).
    #[arg(long = "preview", value_name = "N", default_value_t = 10)]
    pub preview: usize,

    /// Clean and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl CleanArgs {
    /// Flags that override the config file. Unset flags override nothing.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            lowercase: self.no_lowercase.then_some(false),
            strip_special: self.no_strip_special.then_some(false),
            split_alnum_boundary: self.no_split_alnum.then_some(false),
            collapse_whitespace: self.no_collapse_whitespace.then_some(false),
            fold_diacritics: self.keep_diacritics.then_some(false),
            extra_chars: self.extra_chars.clone(),
        }
    }

    pub fn max_file_size(&self) -> u64 {
        self.max_size_mb.saturating_mul(1024 * 1024)
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    fn clean_args(cli: Cli) -> CleanArgs {
        match cli.command {
            Command::Clean(args) => args,
            Command::Defaults => panic!("expected clean"),
        }
    }

    #[test]
    fn clean_defaults() {
        let args = clean_args(parse(&["limpador", "clean", "dados.csv"]));
        assert_eq!(args.input, PathBuf::from("dados.csv"));
        assert_eq!(args.preview, 10);
        assert_eq!(args.max_file_size(), 10 * 1024 * 1024);
        assert!(args.overrides().is_empty());
    }

    #[test]
    fn flags_become_overrides() {
        let args = clean_args(parse(&[
            "limpador",
            "clean",
            "dados.csv",
            "--no-lowercase",
            "--keep-diacritics",
            "--extra-chars",
            "€§",
        ]));
        let overrides = args.overrides();
        assert_eq!(overrides.lowercase, Some(false));
        assert_eq!(overrides.fold_diacritics, Some(false));
        assert_eq!(overrides.strip_special, None);
        assert_eq!(overrides.extra_chars.as_deref(), Some("€§"));
    }

    #[test]
    fn global_log_flags_after_subcommand() {
        let cli = parse(&["limpador", "defaults", "--log-format", "json"]);
        assert!(matches!(cli.log_format, LogFormatArg::Json));
        assert!(matches!(cli.command, Command::Defaults));
    }
}
