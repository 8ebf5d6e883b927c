use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::lifestyle::{EmissionsBreakdown, LifestyleInput};
use crate::estimator::EmissionFactors;

/// Storage key of the saved-calculation history
pub const HISTORY_KEY: &str = "ecotrack_history";

/// Storage key of the progress tracker's calculation log
pub const CALCULATIONS_KEY: &str = "ecotrack_calculations";

/// Default number of history entries retained
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// A saved calculation, appended to history and never mutated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique identifier
    pub id: Uuid,

    /// When the calculation was saved
    pub date: DateTime<Utc>,

    /// Inputs at the time of saving
    pub inputs: LifestyleInput,

    /// Breakdown at the time of saving
    pub breakdown: EmissionsBreakdown,

    /// Total tonnes CO2e per year
    pub total: f64,
}

impl HistoryEntry {
    /// Snapshot an input and its breakdown under a fresh id
    pub fn new(inputs: LifestyleInput, breakdown: EmissionsBreakdown) -> Self {
        Self::at(Utc::now(), inputs, breakdown)
    }

    pub fn at(date: DateTime<Utc>, inputs: LifestyleInput, breakdown: EmissionsBreakdown) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            inputs,
            breakdown,
            total: breakdown.total(),
        }
    }
}

/// Breakdown as stored in the calculation log, with transport split in two
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculationBreakdown {
    pub car: f64,
    pub air: f64,
    pub energy: f64,
    pub diet: f64,
    pub waste: f64,
}

impl CalculationBreakdown {
    pub fn transport(&self) -> f64 {
        self.car + self.air
    }
}

/// A record of the progress tracker's calculation log.
///
/// This schema is independent of [`HistoryEntry`] and lives under a different
/// key. Converting between the two only happens through
/// [`CalculationRecord::from_history_entry`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub timestamp: DateTime<Utc>,
    pub total: f64,
    pub breakdown: CalculationBreakdown,
}

impl CalculationRecord {
    /// Convert a history entry, recovering car and air from its stored inputs
    pub fn from_history_entry(entry: &HistoryEntry) -> Self {
        let factors = EmissionFactors::STANDARD;
        Self {
            timestamp: entry.date,
            total: entry.total,
            breakdown: CalculationBreakdown {
                car: entry.inputs.car_km_per_year * factors.car_tonnes_per_km,
                air: entry.inputs.air_hours_per_year * factors.air_tonnes_per_hour,
                energy: entry.breakdown.energy,
                diet: entry.breakdown.diet,
                waste: entry.breakdown.waste,
            },
        }
    }
}
