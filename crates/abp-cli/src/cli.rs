//! CLI argument definitions for the prophylaxis catalog validator.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use abp_cli::logging::LogFormat;
use abp_model::DEFAULT_PAGE_LIMIT;

#[derive(Parser)]
#[command(
    name = "abp",
    version,
    about = "Surgical antibiotic-prophylaxis catalog - validate and browse the guideline dataset",
    long_about = "Validate the antibiotic-prophylaxis guideline dataset (RFE SFAR 2024) and \
                  query its specialties and interventions.\n\n\
                  Without a subcommand, runs `validate` and exits non-zero when the \
                  dataset is inconsistent."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Dataset JSON file (default: $ABP_DATA_PATH, then data/rfe.json).
    #[arg(long = "data", value_name = "PATH", global = true)]
    pub data: Option<PathBuf>,

    /// Validation config TOML file (default: $ABP_CONFIG, then ./abp.toml if present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// When to use ANSI colors in log output.
    #[command(flatten)]
    pub color: Color,

    /// Log level for the abp crates; takes precedence over -v/-q and RUST_LOG.
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log line format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Append logs to this file rather than stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check dataset consistency and print the report (default).
    Validate(ValidateArgs),

    /// List specialties with their intervention counts.
    Specialties,

    /// Show one intervention by id.
    Show(ShowArgs),

    /// Search interventions by name.
    Search(SearchArgs),

    /// Find interventions using a molecule (protocol or allergy alternative).
    Molecule(SearchArgs),
}

#[derive(Args, Default)]
pub struct ValidateArgs {
    /// Report format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: ReportFormatArg,

    /// Fail on warnings as well as errors.
    #[arg(long = "strict")]
    pub strict: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Intervention id.
    #[arg(value_name = "ID")]
    pub id: String,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Case-insensitive text to look for.
    #[arg(value_name = "TERM")]
    pub term: String,

    /// Number of matches to skip.
    #[arg(long = "skip", default_value_t = 0)]
    pub skip: usize,

    /// Maximum number of matches to show.
    #[arg(long = "limit", default_value_t = DEFAULT_PAGE_LIMIT)]
    pub limit: usize,
}

/// Validation report formats.
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum ReportFormatArg {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
