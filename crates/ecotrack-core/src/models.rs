pub mod air_quality;
pub mod city;
pub mod history;
pub mod lifestyle;

pub use air_quality::{AirQualityReading, AqiClassification, AqiTier, Coordinate, Pollutant};
pub use city::{CityEmissions, EmissionSource, SeverityBucket};
pub use history::{
    CalculationBreakdown, CalculationRecord, HistoryEntry, CALCULATIONS_KEY,
    DEFAULT_HISTORY_CAPACITY, HISTORY_KEY,
};
pub use lifestyle::{Category, DietCategory, EmissionsBreakdown, LifestyleInput};
