//! Command implementations

mod aqi;
mod cities;
mod classify;
mod config;
mod estimate;
mod history;
mod migrate;
mod progress;

use crate::cli::{Cli, Commands};
use crate::config_loader::load_config;
use crate::output::OutputWriter;
use anyhow::Result;
use ecotrack_core::config::CliConfigOverrides;

/// Execute a CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);

    let mut overrides = CliConfigOverrides { data_dir: cli.data_dir, ..Default::default() };
    if let Commands::Aqi(ref args) = cli.command {
        overrides.latitude = args.lat;
        overrides.longitude = args.lon;
        overrides.aqi_endpoint = args.endpoint.clone();
    }
    let config = load_config(overrides)?;

    match cli.command {
        Commands::Estimate(args) => estimate::execute(args, &output, &config).await,
        Commands::History(args) => history::execute(args, &output, &config).await,
        Commands::Progress(args) => progress::execute(args, &output, &config).await,
        Commands::Aqi(_) => aqi::execute(&output, &config).await,
        Commands::Classify(args) => classify::execute(args, &output),
        Commands::Cities(args) => cities::execute(args, &output),
        Commands::Migrate(args) => migrate::execute(args, &output, &config).await,
        Commands::Config => config::execute(&output, &config),
    }
}
