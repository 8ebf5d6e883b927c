use async_trait::async_trait;

use crate::error::Result;
use crate::models::{AirQualityReading, Coordinate};

/// Port for the pollutant data service
#[async_trait]
pub trait AirQualitySource: Send + Sync {
    /// Fetch the most recent sample at a coordinate.
    ///
    /// Fails with `Fetch` on a non-success response or network failure.
    /// Fields absent upstream are `None` in the reading.
    async fn fetch_latest(&self, coordinate: Coordinate) -> Result<AirQualityReading>;
}
