//! Command Line Interface module
//!
//! This module contains the CLI argument parsing and the command
//! implementations.

pub mod args;
pub mod commands;

pub use args::*;

use anyhow::Result;

use crate::utils::logging::init_cli_logging;

/// Main CLI application runner
pub async fn run() -> Result<()> {
    let cli = Cli::parse_args();
    init_cli_logging(cli.verbose, cli.quiet)?;
    commands::execute_command(cli.command.clone(), &cli).await
}
