use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Bikram Sambat calendar tool.
#[derive(Parser)]
#[command(
    name = "sambat",
    version,
    about = "Bikram Sambat date conversion, fiscal years and month grids"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (default: ./sambat.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// BS rendering style: full, short or numeric.
    #[arg(short, long, global = true)]
    pub style: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a Gregorian date to BS.
    ToBs(ToBsArgs),
    /// Convert a BS date to Gregorian.
    ToAd(ToAdArgs),
    /// Show today's date in Nepal.
    Today,
    /// Print the calendar grid of a BS month.
    Grid(GridArgs),
    /// Show fiscal-year windows.
    Fiscal(FiscalArgs),
    /// Check whether text is a valid BS date.
    Validate(ValidateArgs),
}

/// Arguments for the `to-bs` subcommand.
#[derive(clap::Args)]
pub struct ToBsArgs {
    /// Gregorian date as YYYY-MM-DD (default: today in Nepal).
    pub date: Option<NaiveDate>,
}

/// Arguments for the `to-ad` subcommand.
#[derive(clap::Args)]
pub struct ToAdArgs {
    /// BS date as YYYY/MM/DD (`-` and `.` separators also accepted).
    pub date: String,
}

/// Arguments for the `grid` subcommand.
#[derive(clap::Args)]
pub struct GridArgs {
    /// BS year (default: current BS year).
    pub year: Option<i32>,

    /// BS month 1..=12 (default: current BS month).
    pub month: Option<u8>,

    /// Use English month and weekday names.
    #[arg(long)]
    pub english: bool,
}

/// Arguments for the `fiscal` subcommand.
#[derive(clap::Args)]
pub struct FiscalArgs {
    /// Start year of a specific fiscal year.
    #[arg(short, long, conflicts_with = "code")]
    pub year: Option<i32>,

    /// Fiscal year code such as 2082/83.
    #[arg(long)]
    pub code: Option<String>,

    /// List fiscal years around the current one, most recent first.
    #[arg(short, long, conflicts_with_all = ["year", "code"])]
    pub list: bool,

    /// Number of fiscal years to list (default from config).
    #[arg(short = 'n', long, requires = "list")]
    pub count: Option<usize>,
}

/// Arguments for the `validate` subcommand.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Text to check.
    pub date: String,
}
