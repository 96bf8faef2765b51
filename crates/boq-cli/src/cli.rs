//! CLI argument definitions for the BOQ audit tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "boq",
    version,
    about = "BOQ audit - extract, validate and risk-classify bill-of-quantities positions",
    long_about = "Extract line-item positions from tree-structured bill-of-quantities exports.\n\n\
                  Reports every skipped row with the first missing required field, and\n\
                  classifies priced positions as GREEN, AMBER or RED for audit review."
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

    /// Include timestamps in log lines.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module path in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Extract positions and diagnostics from a BOQ XML export.
    Parse(ParseArgs),

    /// Classify priced positions from a JSON array.
    Audit(AuditArgs),

    /// Show the tag names used for extraction.
    Tags(TagsArgs),
}

#[derive(Parser)]
pub struct ParseArgs {
    /// Path to the BOQ XML document.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// JSON file overriding source tag names.
    #[arg(long = "tags", value_name = "PATH")]
    pub tags: Option<PathBuf>,

    /// Write positions and diagnostics as JSON to this path.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct AuditArgs {
    /// Path to a JSON array of position records with upstream signals.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Write audited positions and label counts as JSON to this path.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Exit with status 1 when any position is classified RED.
    #[arg(long = "fail-on-red")]
    pub fail_on_red: bool,
}

#[derive(Parser)]
pub struct TagsArgs {
    /// JSON file overriding source tag names.
    #[arg(long = "tags", value_name = "PATH")]
    pub tags: Option<PathBuf>,
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

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
