//! CLI argument definitions for `addrnorm`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "addrnorm",
    version,
    about = "Normalize US mailing addresses in CSV exports",
    long_about = "Normalize free-text US mailing addresses in CSV exports.\n\n\
                  Detects address-line columns by name, rewrites each value into a\n\
                  canonical token form (directionals abbreviated, unit designators\n\
                  standardized, street suffixes respelled by position), and writes\n\
                  the result in a new column beside the source."
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

    /// Allow raw address values (PII) in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize the address columns of a CSV file.
    File(FileArgs),

    /// List the street-suffix, directional, and unit-designator vocabulary.
    Tables,
}

#[derive(Parser)]
pub struct FileArgs {
    /// CSV file to normalize (omit to pick one interactively).
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Directory searched for CSV files when FILE is omitted.
    #[arg(long = "dir", value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Normalize these columns instead of auto-detecting address columns.
    ///
    /// May be repeated. Columns missing from the file are skipped with a
    /// warning.
    #[arg(long = "column", value_name = "NAME")]
    pub columns: Vec<String>,

    /// Output path (default: <FILE stem>_proc.csv beside the input).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Report what would change without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
