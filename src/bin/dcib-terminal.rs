//! DCIB Terminal Binary
//!
//! Command-line entry point for the recruitment screening terminal.

use anyhow::Context;
use clap::Parser;
use dcib_terminal::logging::init_logging;
use dcib_terminal::tooling::cli::{Cli, CliContext, Commands};
use std::process;

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.load_config().context("loading configuration")?;
    init_logging(Some(&config.logging)).context("initializing logging")?;

    let mut context = CliContext::new(&config).context("initializing terminal")?;
    let command = cli.command.clone().unwrap_or(Commands::Shell);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    context.execute(&command, stdin.lock(), stdout.lock())?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
