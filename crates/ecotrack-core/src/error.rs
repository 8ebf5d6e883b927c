//! Error types for EcoTrack

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EcotrackError {
    // Location errors
    #[error("Location capability unavailable. Configure a latitude and longitude")]
    LocationUnavailable,

    #[error("Location request denied: {reason}")]
    LocationDenied { reason: String },

    #[error("Location request timed out after {timeout_ms} ms")]
    LocationTimeout { timeout_ms: u64 },

    // Air quality errors
    #[error("Failed to fetch air quality: {reason}")]
    Fetch { reason: String },

    #[error("Invalid AQI value {value}: must be a finite number >= 0")]
    InvalidAqi { value: f64 },

    // Input errors
    #[error("Invalid value for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    // Configuration errors
    #[error("Missing required configuration: {key}")]
    ConfigMissing { key: String },

    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl EcotrackError {
    /// Whether the error came from the location step of an AQI lookup
    pub fn is_location_error(&self) -> bool {
        matches!(
            self,
            EcotrackError::LocationUnavailable
                | EcotrackError::LocationDenied { .. }
                | EcotrackError::LocationTimeout { .. }
        )
    }
}

impl From<serde_json::Error> for EcotrackError {
    fn from(err: serde_json::Error) -> Self {
        EcotrackError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EcotrackError>;
