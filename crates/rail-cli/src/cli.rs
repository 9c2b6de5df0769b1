//! CLI argument definitions for the rail currency lookup.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rail-lookup",
    version,
    about = "Rail Currency lookup - match currency notes to rail hardware specs",
    long_about = "Look up rail hardware specifications for currency notes.\n\n\
                  Narrows the reference dataset through four cascading steps\n\
                  (Currency -> IO Module -> Denomination -> Emission), shows the\n\
                  matching specification, and exports the matching rows."
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

    /// Reference dataset (default: Rail.csv, data/Rail.csv, or $RAIL_DATA).
    #[arg(long = "data", value_name = "PATH", global = true)]
    pub data: Option<PathBuf>,

    /// Persisted selection file (default: .rail-selection, or $RAIL_STATE).
    #[arg(long = "state", value_name = "PATH", global = true)]
    pub state: Option<PathBuf>,

    /// Restore a shareable selection reference (curr=..&io=..&denom=..&emis=..)
    /// before applying any other change. Stale values fall back to defaults.
    #[arg(long = "share-ref", value_name = "REF", global = true)]
    pub share_ref: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the specification for the current selection.
    Show,

    /// Change one or more selection steps, then show the result.
    Select(SelectArgs),

    /// List the valid options for each selection step.
    Options,

    /// Export the matching rows to a spreadsheet file.
    Export(ExportArgs),

    /// Clear the persisted selection back to defaults.
    Reset,
}

#[derive(Parser)]
pub struct SelectArgs {
    /// Step 1: currency code (e.g. EUR).
    #[arg(long = "currency", value_name = "CODE")]
    pub currency: Option<String>,

    /// Step 2: IO module.
    #[arg(long = "io-module", value_name = "MODULE")]
    pub io_module: Option<String>,

    /// Step 3: denomination, exactly as authored in the dataset.
    #[arg(long = "denomination", value_name = "VALUE")]
    pub denomination: Option<String>,

    /// Step 4: emission.
    #[arg(long = "emission", value_name = "VALUE")]
    pub emission: Option<String>,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Output file path.
    #[arg(long = "output", value_name = "PATH")]
    pub output: PathBuf,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: ExportFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    Csv,
    Xlsx,
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
