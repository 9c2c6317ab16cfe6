use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Thirteen-moon turtle calendar.
#[derive(Parser)]
#[command(
    name = "turtle",
    version,
    about = "Thirteen-moon turtle calendar, lunar phase and zodiac year for any date"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file [default: turtle.toml if present].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the calendar model (teaching_13x28 or observed_lunar).
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    /// Override the tradition anchor (anishinaabe, haudenosaunee, cherokee, custom).
    #[arg(short, long, global = true)]
    pub tradition: Option<String>,

    /// Start date (YYYY-MM-DD) anchoring the custom tradition.
    #[arg(long = "custom-start", global = true)]
    pub custom_start: Option<String>,

    /// Override the output format (text or json).
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show the turtle date, lunar phase and zodiac year of one day.
    Show(ShowArgs),
    /// List consecutive days between two dates.
    Scan(ScanArgs),
    /// Explain the configured model and tradition.
    Explain,
}

/// Arguments for the `show` subcommand.
#[derive(clap::Args)]
pub struct ShowArgs {
    /// Day to show (YYYY-MM-DD). Defaults to today.
    pub date: Option<String>,

    /// Show both calendar models instead of only the configured one.
    #[arg(short, long)]
    pub all_models: bool,
}

/// Arguments for the `scan` subcommand.
#[derive(clap::Args)]
pub struct ScanArgs {
    /// First day of the range (YYYY-MM-DD).
    #[arg(long)]
    pub from: String,

    /// Last day of the range, inclusive (YYYY-MM-DD).
    #[arg(long)]
    pub to: String,
}
