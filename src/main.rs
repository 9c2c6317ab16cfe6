mod cli;
mod config;
mod convert;
mod explain_cmd;
mod logging;
mod report;
mod scan_cmd;
mod show_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::{Overrides, TurtleConfig};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let overrides = Overrides {
        model: cli.model,
        tradition: cli.tradition,
        custom_start: cli.custom_start,
        format: cli.format,
    };
    let config = TurtleConfig::load(cli.config.as_deref())?.with_overrides(overrides);
    let settings = convert::build_settings(&config)?;

    match cli.command {
        Command::Show(args) => show_cmd::run(args, &settings),
        Command::Scan(args) => scan_cmd::run(args, &settings),
        Command::Explain => explain_cmd::run(&settings),
    }
}
