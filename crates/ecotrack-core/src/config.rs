use crate::error::{EcotrackError, Result};
use crate::models::{Coordinate, DEFAULT_HISTORY_CAPACITY};
use crate::ports::LocationOptions;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default Open-Meteo air quality endpoint
pub const DEFAULT_AQI_ENDPOINT: &str = "https://air-quality-api.open-meteo.com/v1/air-quality";

/// Default directory for persisted data and the config file
pub const DEFAULT_DATA_DIR: &str = ".ecotrack";

/// Name of the config file inside the data directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for EcoTrack
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub data_dir: ConfigValue<PathBuf>,
    pub history_capacity: ConfigValue<usize>,
    pub aqi_endpoint: ConfigValue<String>,
    pub latitude: ConfigValue<Option<f64>>,
    pub longitude: ConfigValue<Option<f64>>,
    pub location_timeout_ms: ConfigValue<u64>,
    pub location_max_age_ms: ConfigValue<u64>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            data_dir: ConfigValue::new(PathBuf::from(DEFAULT_DATA_DIR), ConfigSource::Default),
            history_capacity: ConfigValue::new(DEFAULT_HISTORY_CAPACITY, ConfigSource::Default),
            aqi_endpoint: ConfigValue::new(DEFAULT_AQI_ENDPOINT.to_string(), ConfigSource::Default),
            latitude: ConfigValue::new(None, ConfigSource::Default),
            longitude: ConfigValue::new(None, ConfigSource::Default),
            location_timeout_ms: ConfigValue::new(10_000, ConfigSource::Default),
            location_max_age_ms: ConfigValue::new(60_000, ConfigSource::Default),
        }
    }

    /// Path of the config file under the current data directory
    pub fn config_file(&self) -> PathBuf {
        self.data_dir.value.join(CONFIG_FILE_NAME)
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| EcotrackError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| EcotrackError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(data_dir) = file_config.data_dir {
            self.data_dir.update(data_dir, ConfigSource::File);
        }

        if let Some(capacity) = file_config.history_capacity {
            self.history_capacity.update(validate_capacity(capacity)?, ConfigSource::File);
        }

        if let Some(endpoint) = file_config.aqi_endpoint {
            self.aqi_endpoint.update(endpoint, ConfigSource::File);
        }

        if let Some(latitude) = file_config.latitude {
            self.latitude.update(Some(latitude), ConfigSource::File);
        }

        if let Some(longitude) = file_config.longitude {
            self.longitude.update(Some(longitude), ConfigSource::File);
        }

        if let Some(timeout) = file_config.location_timeout_ms {
            self.location_timeout_ms.update(timeout, ConfigSource::File);
        }

        if let Some(max_age) = file_config.location_max_age_ms {
            self.location_max_age_ms.update(max_age, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load the config file if it exists
    pub fn load_from_file_if_exists<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        if path.as_ref().exists() {
            self.load_from_file(path)
        } else {
            tracing::debug!(path = %path.as_ref().display(), "No config file, using defaults");
            Ok(self)
        }
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // ECOTRACK_DATA_DIR
        if let Ok(dir) = env::var("ECOTRACK_DATA_DIR") {
            self.data_dir.update(PathBuf::from(dir), ConfigSource::Environment);
        }

        // ECOTRACK_HISTORY_CAPACITY
        if let Ok(capacity_str) = env::var("ECOTRACK_HISTORY_CAPACITY") {
            match capacity_str.parse::<usize>().ok().filter(|c| *c > 0) {
                Some(capacity) => self.history_capacity.update(capacity, ConfigSource::Environment),
                None => tracing::warn!(
                    "Invalid ECOTRACK_HISTORY_CAPACITY value '{}': expected a positive integer",
                    capacity_str
                ),
            }
        }

        // ECOTRACK_AQI_ENDPOINT
        if let Ok(endpoint) = env::var("ECOTRACK_AQI_ENDPOINT") {
            self.aqi_endpoint.update(endpoint, ConfigSource::Environment);
        }

        // ECOTRACK_LATITUDE
        if let Ok(lat_str) = env::var("ECOTRACK_LATITUDE") {
            match lat_str.parse::<f64>() {
                Ok(lat) => self.latitude.update(Some(lat), ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid ECOTRACK_LATITUDE value '{}': expected decimal degrees",
                    lat_str
                ),
            }
        }

        // ECOTRACK_LONGITUDE
        if let Ok(lon_str) = env::var("ECOTRACK_LONGITUDE") {
            match lon_str.parse::<f64>() {
                Ok(lon) => self.longitude.update(Some(lon), ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid ECOTRACK_LONGITUDE value '{}': expected decimal degrees",
                    lon_str
                ),
            }
        }

        // ECOTRACK_LOCATION_TIMEOUT_MS
        if let Ok(timeout_str) = env::var("ECOTRACK_LOCATION_TIMEOUT_MS") {
            match timeout_str.parse::<u64>() {
                Ok(timeout) => self.location_timeout_ms.update(timeout, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid ECOTRACK_LOCATION_TIMEOUT_MS value '{}': expected milliseconds",
                    timeout_str
                ),
            }
        }

        // ECOTRACK_LOCATION_MAX_AGE_MS
        if let Ok(max_age_str) = env::var("ECOTRACK_LOCATION_MAX_AGE_MS") {
            match max_age_str.parse::<u64>() {
                Ok(max_age) => self.location_max_age_ms.update(max_age, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid ECOTRACK_LOCATION_MAX_AGE_MS value '{}': expected milliseconds",
                    max_age_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(data_dir) = overrides.data_dir {
            self.data_dir.update(data_dir, ConfigSource::Cli);
        }

        if let Some(capacity) = overrides.history_capacity {
            self.history_capacity.update(capacity, ConfigSource::Cli);
        }

        if let Some(endpoint) = overrides.aqi_endpoint {
            self.aqi_endpoint.update(endpoint, ConfigSource::Cli);
        }

        if let Some(latitude) = overrides.latitude {
            self.latitude.update(Some(latitude), ConfigSource::Cli);
        }

        if let Some(longitude) = overrides.longitude {
            self.longitude.update(Some(longitude), ConfigSource::Cli);
        }
    }

    /// Configured coordinate, if both components are set.
    ///
    /// `None` means the location capability is absent.
    pub fn location(&self) -> Result<Option<Coordinate>> {
        match (self.latitude.value, self.longitude.value) {
            (Some(latitude), Some(longitude)) => {
                let coordinate = Coordinate::new(latitude, longitude);
                if !coordinate.is_valid() {
                    return Err(EcotrackError::ConfigInvalid {
                        key: "location".to_string(),
                        reason: format!("coordinate out of range: {}", coordinate),
                    });
                }
                Ok(Some(coordinate))
            }
            (None, None) => Ok(None),
            (Some(_), None) => Err(EcotrackError::ConfigMissing { key: "longitude".to_string() }),
            (None, Some(_)) => Err(EcotrackError::ConfigMissing { key: "latitude".to_string() }),
        }
    }

    /// Options for position requests
    pub fn location_options(&self) -> LocationOptions {
        LocationOptions {
            high_accuracy: false,
            timeout: Duration::from_millis(self.location_timeout_ms.value),
            maximum_age: Duration::from_millis(self.location_max_age_ms.value),
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> BTreeMap<String, (String, ConfigSource)> {
        let mut map = BTreeMap::new();

        map.insert(
            "data_dir".to_string(),
            (self.data_dir.value.display().to_string(), self.data_dir.source),
        );

        map.insert(
            "history_capacity".to_string(),
            (self.history_capacity.value.to_string(), self.history_capacity.source),
        );

        map.insert(
            "aqi_endpoint".to_string(),
            (self.aqi_endpoint.value.clone(), self.aqi_endpoint.source),
        );

        map.insert("latitude".to_string(), (display_optional(self.latitude.value), self.latitude.source));

        map.insert(
            "longitude".to_string(),
            (display_optional(self.longitude.value), self.longitude.source),
        );

        map.insert(
            "location_timeout_ms".to_string(),
            (self.location_timeout_ms.value.to_string(), self.location_timeout_ms.source),
        );

        map.insert(
            "location_max_age_ms".to_string(),
            (self.location_max_age_ms.value.to_string(), self.location_max_age_ms.source),
        );

        map
    }
}

fn display_optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "(unset)".to_string())
}

fn validate_capacity(capacity: usize) -> Result<usize> {
    if capacity == 0 {
        return Err(EcotrackError::ConfigInvalid {
            key: "history_capacity".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(capacity)
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    data_dir: Option<PathBuf>,
    history_capacity: Option<usize>,
    aqi_endpoint: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    location_timeout_ms: Option<u64>,
    location_max_age_ms: Option<u64>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub data_dir: Option<PathBuf>,
    pub history_capacity: Option<usize>,
    pub aqi_endpoint: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
