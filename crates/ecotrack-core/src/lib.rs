//! EcoTrack Core - Domain models, emissions computation, and configuration
//!
//! This crate contains the pure computational core of EcoTrack (the footprint
//! estimator, the AQI classifier, the city dataset aggregator and the progress
//! tracker) together with the port definitions that adapters implement.

pub mod aqi;
pub mod config;
pub mod dataset;
pub mod error;
pub mod estimator;
pub mod models;
pub mod ports;
pub mod progress;

pub use error::{EcotrackError, Result};
