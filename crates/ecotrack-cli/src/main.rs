//! EcoTrack CLI - Command-line interface
//!
//! Footprint estimates, saved history, air quality and the city dataset from
//! a terminal.

mod cli;
mod commands;
mod config_loader;
mod errors;
mod output;
mod output_types;
mod storage;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use errors::CliError;

fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();
    let json = cli.json;

    // Create async runtime
    let runtime = tokio::runtime::Runtime::new()?;

    // Execute the command
    let result = runtime.block_on(commands::execute(cli));

    if let Err(e) = result {
        if let Some(cli_error) = e.downcast_ref::<CliError>() {
            if json {
                cli_error.display_json();
            } else {
                cli_error.display();
            }
            std::process::exit(1);
        }
        return Err(e);
    }

    Ok(())
}
