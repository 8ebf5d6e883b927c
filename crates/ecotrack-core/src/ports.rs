//! Port trait definitions
//!
//! These traits define the interfaces that adapters must implement.

pub mod air_quality;
pub mod location;
pub mod storage;

pub use air_quality::AirQualitySource;
pub use location::{LocationOptions, LocationProvider};
pub use storage::{CalculationLog, HistoryStore};
