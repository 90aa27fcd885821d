//! CLI argument definitions for the roster query tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use roster_model::Role;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Photographer roster analytics",
    long_about = "Query a photographer roster CSV: record summary, top cities and states,\n\
                  a trend forecast over city counts, geographic distribution, and the\n\
                  demonstration series used by the dashboard."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub query: QueryArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

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

    /// Allow roster values (names, phones, emails) in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Prefix pretty and compact log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module path in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Leave span close events out of JSON logs.
    #[arg(long = "no-log-spans", global = true)]
    pub no_log_spans: bool,
}

#[derive(Args)]
pub struct QueryArgs {
    /// Roster CSV file.
    #[arg(long = "data", value_name = "PATH", global = true)]
    pub data: Option<PathBuf>,

    /// TOML file supplying `dataset`, `top_n`, `horizon`, and `seed`.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[arg(long = "format", value_enum, default_value = "table", global = true)]
    pub format: OutputFormatArg,

    /// Seed for the demonstration series (random when omitted).
    #[arg(long = "seed", value_name = "N", global = true)]
    pub seed: Option<u64>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Record count, distinct counts, and contact coverage.
    Summary,

    /// Cities with the most records.
    TopCities,

    /// States with the most records.
    TopStates,

    /// Most frequent values of any role's column.
    Top {
        /// One of: name, city, state, phone, email, website, zip_code.
        #[arg(long = "role", value_parser = parse_role)]
        role: Role,
    },

    /// Linear trend over the top city counts, extrapolated forward.
    Predictions(TrendArgs),

    /// Record count for every state.
    Geo,

    /// Demonstration series.
    Mock {
        #[arg(value_enum)]
        series: MockSeriesArg,
    },

    /// Which column each role resolved to.
    Columns,

    /// Every query at once.
    Report(TrendArgs),
}

#[derive(Args, Clone, Copy, Default)]
pub struct TrendArgs {
    /// Ranked city groups used as history.
    #[arg(long = "top-n", value_name = "N")]
    pub top_n: Option<usize>,

    /// Number of points to extrapolate.
    #[arg(long = "horizon", value_name = "N")]
    pub horizon: Option<usize>,
}

fn parse_role(value: &str) -> Result<Role, roster_model::RosterError> {
    value.parse()
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MockSeriesArg {
    Revenue,
    Equipment,
    PhotographyTypes,
    Satisfaction,
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
