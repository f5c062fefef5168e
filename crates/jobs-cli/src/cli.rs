//! CLI argument definitions for `job-market`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "job-market",
    version,
    about = "UK data job market analysis",
    long_about = "Analyze scraped UK data-job listings.\n\n\
                  Normalizes salaries, posting ages and skills, filters implausible salaries,\n\
                  and produces rankings, charts, a cleaned CSV and a SQLite database."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub paths: PathArgs,

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

/// Locations that override the configuration file.
#[derive(Args, Default)]
pub struct PathArgs {
    /// TOML configuration file.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Raw listing CSV.
    #[arg(long = "input", value_name = "PATH", global = true)]
    pub input: Option<PathBuf>,

    /// Directory for the cleaned dataset and table exports.
    #[arg(long = "output-dir", value_name = "DIR", global = true)]
    pub output_dir: Option<PathBuf>,

    /// Directory for SVG charts.
    #[arg(long = "charts-dir", value_name = "DIR", global = true)]
    pub charts_dir: Option<PathBuf>,

    /// SQLite database file.
    #[arg(long = "database", value_name = "PATH", global = true)]
    pub database: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the full analysis: profile, normalize, rank, chart, export.
    Analyze,

    /// Build the SQLite database and export its tables as CSV.
    SetupDb,

    /// Run a canned query against the database.
    Query(QueryArgs),

    /// Interactive menu.
    Menu,
}

#[derive(Args)]
pub struct QueryArgs {
    /// Query name (see --list).
    #[arg(value_name = "NAME", required_unless_present = "list")]
    pub name: Option<String>,

    /// List available queries.
    #[arg(long = "list")]
    pub list: bool,

    /// Print the result as JSON.
    #[arg(long = "json")]
    pub json: bool,
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
