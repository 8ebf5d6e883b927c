//! Configuration loading utilities for CLI commands

use anyhow::{Context, Result};
use ecotrack_core::config::{CliConfigOverrides, LayeredConfig, CONFIG_FILE_NAME};
use std::path::PathBuf;

/// Directory the config file is read from: the CLI flag, then the
/// environment, then the default
pub fn resolve_data_dir(cli_data_dir: Option<PathBuf>) -> PathBuf {
    let mut probe = LayeredConfig::with_defaults().load_from_env();
    probe.update_from_cli(CliConfigOverrides { data_dir: cli_data_dir, ..Default::default() });
    probe.data_dir.value
}

/// Load layered configuration with CLI overrides
pub fn load_config(overrides: CliConfigOverrides) -> Result<LayeredConfig> {
    let config_path = resolve_data_dir(overrides.data_dir.clone()).join(CONFIG_FILE_NAME);

    let mut config = LayeredConfig::with_defaults()
        .load_from_file_if_exists(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?
        .load_from_env();

    config.update_from_cli(overrides);
    Ok(config)
}
