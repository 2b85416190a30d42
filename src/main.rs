mod cli;
mod config;
mod convert;
mod date_cmd;
mod fiscal_cmd;
mod grid_cmd;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    let settings = convert::build_settings(&config, cli.style.as_deref(), cli.json)?;

    match cli.command {
        Command::ToBs(args) => date_cmd::to_bs(args, &settings),
        Command::ToAd(args) => date_cmd::to_ad(args, &settings),
        Command::Today => date_cmd::today(&settings),
        Command::Grid(args) => grid_cmd::run(args, &settings),
        Command::Fiscal(args) => fiscal_cmd::run(args, &settings),
        Command::Validate(args) => date_cmd::validate(args, &settings),
    }
}
