//! AQI classification and the air-quality acquisition sequence

use serde::Serialize;
use std::sync::Arc;

use crate::error::{EcotrackError, Result};
use crate::models::{AirQualityReading, AqiClassification, AqiTier, Coordinate};
use crate::ports::{AirQualitySource, LocationOptions, LocationProvider};

/// Tier of an AQI value. Exact thresholds resolve to the lower tier.
///
/// Negative and non-finite values are rejected.
pub fn tier_for(value: f64) -> Result<AqiTier> {
    if !value.is_finite() || value < 0.0 {
        return Err(EcotrackError::InvalidAqi { value });
    }

    let tier = AqiTier::ALL
        .into_iter()
        .find(|tier| tier.upper_bound().map_or(true, |bound| value <= bound))
        .unwrap_or(AqiTier::Hazardous);
    Ok(tier)
}

/// Classify an AQI value with its label and guidance
pub fn classify(value: f64) -> Result<AqiClassification> {
    Ok(AqiClassification::new(value, tier_for(value)?))
}

/// A reading together with its classification, if the index was present
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirQualityReport {
    pub reading: AirQualityReading,
    pub classification: Option<AqiClassification>,
}

impl AirQualityReport {
    pub fn from_reading(reading: AirQualityReading) -> Self {
        let classification = reading.aqi.and_then(|value| match classify(value) {
            Ok(classification) => Some(classification),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unusable AQI from upstream");
                None
            }
        });
        Self { reading, classification }
    }
}

/// Runs the locate-then-fetch sequence.
///
/// There is no retry and no deduplication: every call resolves a position and
/// issues one fetch.
pub struct AirQualityMonitor {
    location: Option<Arc<dyn LocationProvider>>,
    source: Arc<dyn AirQualitySource>,
    options: LocationOptions,
}

impl AirQualityMonitor {
    pub fn new(
        location: Option<Arc<dyn LocationProvider>>,
        source: Arc<dyn AirQualitySource>,
        options: LocationOptions,
    ) -> Self {
        Self { location, source, options }
    }

    pub fn options(&self) -> &LocationOptions {
        &self.options
    }

    /// Request the current position, bounded by the configured timeout
    pub async fn locate(&self) -> Result<Coordinate> {
        let provider = self.location.as_ref().ok_or(EcotrackError::LocationUnavailable)?;

        match tokio::time::timeout(self.options.timeout, provider.current_position(&self.options))
            .await
        {
            Ok(result) => result,
            Err(_) => Err(EcotrackError::LocationTimeout {
                timeout_ms: self.options.timeout.as_millis() as u64,
            }),
        }
    }

    /// Fetch and classify the latest reading at a known coordinate
    pub async fn report_at(&self, coordinate: Coordinate) -> Result<AirQualityReport> {
        if !coordinate.is_valid() {
            return Err(EcotrackError::InvalidInput {
                field: "coordinate".to_string(),
                reason: format!("out of range: {}", coordinate),
            });
        }

        let reading = self.source.fetch_latest(coordinate).await?;
        let report = AirQualityReport::from_reading(reading);

        tracing::info!(
            latitude = coordinate.latitude,
            longitude = coordinate.longitude,
            aqi = ?report.reading.aqi,
            tier = ?report.classification.map(|c| c.tier),
            "Resolved air quality reading"
        );
        Ok(report)
    }

    /// Locate, then fetch and classify
    pub async fn current_report(&self) -> Result<AirQualityReport> {
        let coordinate = self.locate().await?;
        self.report_at(coordinate).await
    }
}
