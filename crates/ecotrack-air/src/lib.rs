//! EcoTrack Air - Adapters for the air-quality acquisition ports
//!
//! This crate provides the Open-Meteo pollutant client and the location
//! providers used by the CLI and the API server.

pub mod location;
pub mod open_meteo;

// Re-export main types
pub use location::{CachedLocation, FixedLocation};
pub use open_meteo::{latest_reading, OpenMeteoClient, OpenMeteoResponse, HOURLY_FIELDS};
