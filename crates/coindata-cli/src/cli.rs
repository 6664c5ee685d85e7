//! CLI argument definitions for coindata.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `price` | Price on a date, falling back to the previous day |
//! | `range` | Every published price inside a date window |
//! | `summary` | Latest price and this month's daily performance |
//! | `sources` | Known assets and their default feeds |
//!
//! # Examples
//!
//! ```bash
//! coindata price btc
//! coindata range eth --start 2024-01-01 --end 2024-01-31 --format json --pretty
//! coindata summary btc --feed-file ./btc.csv
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use coindata_core::feed::DEFAULT_TIMEOUT_MS;
use coindata_core::CalendarDate;

/// Daily historical crypto prices by calendar date.
#[derive(Debug, Parser)]
#[command(name = "coindata", author, version, about = "Daily historical crypto prices")]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Feed request timeout in milliseconds.
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Load the asset's prices from this URL instead of its default feed.
    #[arg(long, global = true, conflicts_with = "feed_file")]
    pub feed_url: Option<String>,

    /// Load the asset's prices from a local CSV file.
    #[arg(long, global = true)]
    pub feed_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    Text,
    /// Single JSON object.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Price on a date (default today); falls back to the day before when
    /// no price was published.
    Price(PriceArgs),

    /// List every published price between two dates, inclusive.
    Range(RangeArgs),

    /// Latest price plus average, best and worst daily change this month.
    Summary(SummaryArgs),

    /// List known asset identifiers and their default feeds.
    Sources,
}

/// Arguments for the `price` command.
#[derive(Debug, Args)]
pub struct PriceArgs {
    /// Asset identifier (case-insensitive), e.g. btc or ETH.
    pub asset: String,

    /// Date to look up, YYYY-MM-DD.
    #[arg(long)]
    pub date: Option<CalendarDate>,
}

/// Arguments for the `range` command.
#[derive(Debug, Args)]
pub struct RangeArgs {
    pub asset: String,

    /// First date of the window, YYYY-MM-DD.
    #[arg(long)]
    pub start: CalendarDate,

    /// Last date of the window, YYYY-MM-DD (default today).
    #[arg(long)]
    pub end: Option<CalendarDate>,
}

/// Arguments for the `summary` command.
#[derive(Debug, Args)]
pub struct SummaryArgs {
    pub asset: String,

    /// Treat this date as "today", YYYY-MM-DD.
    #[arg(long)]
    pub as_of: Option<CalendarDate>,
}
