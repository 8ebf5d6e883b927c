//! Classify command implementation

use crate::cli::ClassifyArgs;
use crate::errors::from_core;
use crate::output::OutputWriter;
use anyhow::Result;
use ecotrack_core::aqi;

pub fn execute(args: ClassifyArgs, output: &OutputWriter) -> Result<()> {
    let classification = aqi::classify(args.value).map_err(from_core)?;

    if output.is_json() {
        output.result(classification)?;
    } else {
        output.kv("AQI", format!("{:.0}", classification.value));
        output.kv("Category", classification.label);
        output.info(classification.guidance);
    }

    Ok(())
}
