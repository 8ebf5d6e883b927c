use anyhow::{Context, Result};
use ecotrack_core::config::{LayeredConfig, CONFIG_FILE_NAME};
use std::env;

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub cors_origin: String,

    /// Persist to the data directory instead of memory
    pub persist: bool,

    /// Shared EcoTrack configuration (data dir, endpoint, location)
    pub ecotrack: LayeredConfig,
}

impl ApiConfig {
    /// Load configuration from environment variables and the data directory's config file
    pub fn from_env() -> Result<Self> {
        let port = env::var("ECOTRACK_PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(3001);

        let cors_origin =
            env::var("ECOTRACK_CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string());

        let persist = env::var("ECOTRACK_DATA_DIR").is_ok();

        let data_dir = LayeredConfig::with_defaults().load_from_env().data_dir.value;
        let config_path = data_dir.join(CONFIG_FILE_NAME);
        let ecotrack = LayeredConfig::with_defaults()
            .load_from_file_if_exists(&config_path)
            .with_context(|| format!("Failed to load {}", config_path.display()))?
            .load_from_env();

        Ok(Self {
            port,
            cors_origin,
            persist,
            ecotrack,
        })
    }

    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
