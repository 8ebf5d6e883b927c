//! Config command implementation

use crate::output::OutputWriter;
use crate::output_types::{ConfigEntry, ConfigOutput, ConfigRow};
use anyhow::Result;
use ecotrack_core::config::LayeredConfig;

pub fn execute(output: &OutputWriter, config: &LayeredConfig) -> Result<()> {
    let values = config.to_inspection_map();

    if output.is_json() {
        output.result(ConfigOutput {
            config_file: config.config_file().display().to_string(),
            values: values
                .into_iter()
                .map(|(key, (value, source))| (key, ConfigEntry { value, source }))
                .collect(),
        })?;
    } else {
        output.section("Configuration");
        output.kv("Config file", config.config_file().display());
        output.table(
            values
                .into_iter()
                .map(|(key, (value, source))| ConfigRow {
                    key,
                    value,
                    source: format!("{:?}", source),
                })
                .collect::<Vec<_>>(),
        );
    }

    Ok(())
}
