mod cli;
mod config;
mod day_cmd;
mod logging;
mod month_cmd;
mod readings_cmd;
mod view;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Day(args) => day_cmd::run(args),
        Command::Month(args) => month_cmd::run(args),
        Command::Readings(args) => readings_cmd::run(args),
    }
}
