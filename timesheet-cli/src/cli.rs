use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use timesheet::domain::{DateKey, PeriodKind};

#[derive(Debug, Parser)]
#[command(name = "timesheet")]
#[command(about = "Weekly and monthly timesheet summaries from fetched time entries")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Per-day totals, overflow and submit state for a period
    Summary(PeriodArgs),
    /// Month grid with leading padding days
    Grid(PeriodArgs),
    /// Write the period's entries as CSV
    Export {
        #[command(flatten)]
        period: PeriodArgs,
        /// Output file, stdout when omitted
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Print the request for copying the previous week into this one
    Replicate(PeriodArgs),
    /// Print config path and create default file if missing
    ConfigPath,
}

#[derive(Debug, Args)]
pub struct PeriodArgs {
    /// weekly or monthly, defaults to the configured view
    #[arg(long)]
    pub view: Option<PeriodKind>,
    /// Reference date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<DateKey>,
    /// Move this many periods forward (negative for backward)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub shift: i32,
    /// JSON file with the fetched time entries
    #[arg(long)]
    pub entries: Option<PathBuf>,
}
