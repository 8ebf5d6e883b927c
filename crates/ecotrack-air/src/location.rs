//! Location providers
//!
//! A terminal or server process has no device positioning, so the position
//! comes from configuration. [`CachedLocation`] adds the `maximum_age`
//! semantics of a one-shot position request on top of any provider.

use async_trait::async_trait;
use ecotrack_core::error::{EcotrackError, Result};
use ecotrack_core::models::Coordinate;
use ecotrack_core::ports::{LocationOptions, LocationProvider};
use std::time::Instant;
use tokio::sync::Mutex;

/// Provider that always resolves to a configured coordinate
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation {
    coordinate: Coordinate,
}

impl FixedLocation {
    pub fn new(coordinate: Coordinate) -> Result<Self> {
        if !coordinate.is_valid() {
            return Err(EcotrackError::InvalidInput {
                field: "coordinate".to_string(),
                reason: format!("out of range: {}", coordinate),
            });
        }
        Ok(Self { coordinate })
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn current_position(&self, _options: &LocationOptions) -> Result<Coordinate> {
        Ok(self.coordinate)
    }
}

/// Reuses the last resolved position while it is younger than `maximum_age`
pub struct CachedLocation<P> {
    inner: P,
    last: Mutex<Option<(Instant, Coordinate)>>,
}

impl<P: LocationProvider> CachedLocation<P> {
    pub fn new(inner: P) -> Self {
        Self { inner, last: Mutex::new(None) }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

#[async_trait]
impl<P: LocationProvider> LocationProvider for CachedLocation<P> {
    async fn current_position(&self, options: &LocationOptions) -> Result<Coordinate> {
        let mut last = self.last.lock().await;

        if let Some((resolved_at, coordinate)) = *last {
            if resolved_at.elapsed() <= options.maximum_age {
                tracing::debug!(%coordinate, "Reusing cached position");
                return Ok(coordinate);
            }
        }

        let coordinate = self.inner.current_position(options).await?;
        *last = Some((Instant::now(), coordinate));
        Ok(coordinate)
    }
}
