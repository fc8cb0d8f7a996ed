//! idctl - CLI for South African ID numbers
//!
//! Generates random ID numbers, builds them from fields, and validates or
//! explains existing ones.

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod error;
mod logging;
mod output;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::Config::from_env()?;

    logging::init(&config);

    if let Err(e) = cli.run(config) {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
