//! AQI command implementation

use crate::errors::from_core;
use crate::output::OutputWriter;
use crate::output_types::{AqiOutput, PollutantRow};
use anyhow::Result;
use ecotrack_air::{CachedLocation, FixedLocation, OpenMeteoClient};
use ecotrack_core::aqi::AirQualityMonitor;
use ecotrack_core::config::LayeredConfig;
use ecotrack_core::ports::LocationProvider;
use std::sync::Arc;

pub async fn execute(output: &OutputWriter, config: &LayeredConfig) -> Result<()> {
    let monitor = build_monitor(config)?;
    let report = monitor.current_report().await.map_err(from_core)?;

    if output.is_json() {
        output.result(AqiOutput { report, source: config.aqi_endpoint.value.clone() })?;
        return Ok(());
    }

    let reading = &report.reading;
    output.section("Air Quality");
    output.kv("Location", reading.coordinate);
    if let Some(ref time) = reading.time {
        output.kv("Sampled", time);
    }

    match (reading.aqi, report.classification) {
        (Some(aqi), Some(classification)) => {
            output.kv("US AQI", format!("{:.0}", aqi));
            output.kv("Category", classification.label);
            output.info(classification.guidance);
        }
        _ => output.kv("US AQI", "unavailable"),
    }

    output.section("Pollutants");
    output.table(
        reading
            .pollutants()
            .into_iter()
            .map(|(pollutant, value)| PollutantRow {
                pollutant: pollutant.label(),
                value: match value {
                    Some(v) => format!("{:.1} {}", v, pollutant.unit()),
                    None => "–".to_string(),
                },
            })
            .collect::<Vec<_>>(),
    );

    Ok(())
}

/// Wire the monitor from configuration. Without a coordinate the location
/// capability is absent and the lookup fails with `LocationUnavailable`.
fn build_monitor(config: &LayeredConfig) -> Result<AirQualityMonitor> {
    let location: Option<Arc<dyn LocationProvider>> = match config.location().map_err(from_core)? {
        Some(coordinate) => {
            let fixed = FixedLocation::new(coordinate).map_err(from_core)?;
            Some(Arc::new(CachedLocation::new(fixed)) as Arc<dyn LocationProvider>)
        }
        None => None,
    };

    let source = Arc::new(OpenMeteoClient::new(config.aqi_endpoint.value.clone()));
    Ok(AirQualityMonitor::new(location, source, config.location_options()))
}
