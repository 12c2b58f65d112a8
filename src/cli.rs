use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Typikon liturgical calendar engine.
#[derive(Parser)]
#[command(
    name = "typikon",
    version,
    about = "Eastern Orthodox liturgical calendar engine"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve one civil date into its composite liturgical day.
    Day(DayArgs),
    /// List every day of a civil month, one line per day.
    Month(MonthArgs),
    /// List the appointed readings for a civil date.
    Readings(ReadingsArgs),
}

/// Arguments for the `day` subcommand.
#[derive(clap::Args)]
pub struct DayArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "typikon.toml")]
    pub config: PathBuf,

    /// Civil date as YYYY-MM-DD (default: today).
    #[arg(short, long)]
    pub date: Option<chrono::NaiveDate>,

    /// Use the Julian reckoning for the fixed cycle.
    #[arg(long)]
    pub julian: bool,

    /// Emit the day as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "typikon.toml")]
    pub config: PathBuf,

    /// Civil year.
    #[arg(short, long)]
    pub year: i32,

    /// Civil month, 1-12.
    #[arg(short, long)]
    pub month: u8,

    /// Use the Julian reckoning for the fixed cycle.
    #[arg(long)]
    pub julian: bool,

    /// Emit the month as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `readings` subcommand.
#[derive(clap::Args)]
pub struct ReadingsArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "typikon.toml")]
    pub config: PathBuf,

    /// Civil date as YYYY-MM-DD (default: today).
    #[arg(short, long)]
    pub date: Option<chrono::NaiveDate>,

    /// Use the Julian reckoning for the fixed cycle.
    #[arg(long)]
    pub julian: bool,

    /// Select the abbreviated list instead of the full one.
    #[arg(short, long)]
    pub abbreviated: bool,

    /// Fetch passage text for each reading.
    #[arg(long)]
    pub content: bool,

    /// Emit the readings as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}
