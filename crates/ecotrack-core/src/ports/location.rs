use async_trait::async_trait;
use std::time::Duration;

use crate::error::Result;
use crate::models::Coordinate;

/// Options for a one-shot position request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationOptions {
    pub high_accuracy: bool,

    /// How long to wait for a position
    pub timeout: Duration,

    /// Oldest cached position that may be returned
    pub maximum_age: Duration,
}

impl Default for LocationOptions {
    fn default() -> Self {
        Self {
            high_accuracy: false,
            timeout: Duration::from_secs(10),
            maximum_age: Duration::from_secs(60),
        }
    }
}

/// Port for the location capability
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Resolve the current position once.
    ///
    /// Fails with `LocationDenied` or `LocationTimeout`.
    async fn current_position(&self, options: &LocationOptions) -> Result<Coordinate>;
}
