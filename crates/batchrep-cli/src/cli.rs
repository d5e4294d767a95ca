//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "batchrep",
    version,
    about = "Render manufacturing batch records as styled xlsx reports",
    long_about = "Render manufacturing batch-archive records as styled xlsx reports.\n\n\
                  Reads a materialized result set (a JSON array of archive rows)\n\
                  and produces the sectioned workbook for the batch-device pairing."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

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
    /// Generate a report workbook from an archive result set.
    Generate(GenerateArgs),

    /// List all registered report types.
    Types,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Path to the result-set file: a JSON array of archive row objects.
    #[arg(value_name = "ROWS_FILE")]
    pub rows_file: PathBuf,

    /// Report-type key (the archive table the batch run lands in).
    #[arg(
        long = "report-type",
        value_name = "KEY",
        default_value = "T_TQ_Batch_Archive"
    )]
    pub report_type: String,

    /// Output workbook path (default: batch_report_<batch_number>.xlsx).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
