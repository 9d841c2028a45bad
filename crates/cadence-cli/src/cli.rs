use cadence_core::{Frequency, WeekOfMonth};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Preview, describe and check recurring calendar dates
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a configuration file
    #[arg(long, global = true, default_value = "cadence.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print a plain-English description of a rule
    Describe(DescribeCommand),
    /// List the first occurrences of a rule
    Preview(PreviewCommand),
    /// Show a month calendar with occurrences highlighted
    Calendar(CalendarCommand),
    /// Find the next occurrence after a date
    Next(NextCommand),
    /// Check whether a date falls inside a start/end range
    Check(CheckCommand),
}

/// Options shared by every command that works on a recurrence rule.
#[derive(Args, Debug, Clone)]
pub struct RuleArgs {
    /// Repeat unit (daily, weekly, monthly, yearly)
    #[arg(long, default_value = "daily")]
    pub every: Frequency,
    /// Repeat every N units
    #[arg(long, default_value = "1", allow_hyphen_values = true)]
    pub interval: String,
    /// First day of the rule (e.g., '2024-01-15', 'tomorrow'); defaults to today
    #[arg(long)]
    pub start: Option<String>,
    /// Last possible day of the rule, inclusive
    #[arg(long)]
    pub end: Option<String>,
    /// Weekdays for weekly rules (mon,wed,fri | weekdays | weekends | none)
    #[arg(long)]
    pub on: Option<String>,
    /// Day of month for monthly rules (1-31)
    #[arg(long, conflicts_with_all = ["weekday", "position"])]
    pub day_of_month: Option<u32>,
    /// Weekday for monthly rules (e.g., 'friday')
    #[arg(long)]
    pub weekday: Option<String>,
    /// Position of the weekday in the month (first, second, third, fourth, last)
    #[arg(long)]
    pub position: Option<WeekOfMonth>,
}

#[derive(Parser, Debug, Clone)]
pub struct DescribeCommand {
    #[command(flatten)]
    pub rule: RuleArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct PreviewCommand {
    #[command(flatten)]
    pub rule: RuleArgs,
    /// Number of occurrences to show (defaults to the configured preview count)
    #[arg(short = 'n', long)]
    pub count: Option<usize>,
}

#[derive(Parser, Debug, Clone)]
pub struct CalendarCommand {
    #[command(flatten)]
    pub rule: RuleArgs,
    /// Month to show as YYYY-MM; defaults to the month of the start date
    #[arg(long)]
    pub month: Option<String>,
    /// Number of consecutive months to show
    #[arg(long, default_value_t = 1)]
    pub months: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct NextCommand {
    #[command(flatten)]
    pub rule: RuleArgs,
    /// Look for occurrences strictly after this date; defaults to today
    #[arg(long)]
    pub after: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CheckCommand {
    /// The date to check
    pub date: String,
    /// Start of the range, inclusive
    #[arg(long)]
    pub start: String,
    /// End of the range, inclusive; open-ended when omitted
    #[arg(long)]
    pub end: Option<String>,
}
