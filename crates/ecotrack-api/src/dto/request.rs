use ecotrack_core::models::{DietCategory, LifestyleInput};
use serde::Deserialize;

/// Estimate request body; omitted fields take the default lifestyle values
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequest {
    pub car_km_per_year: Option<f64>,
    pub air_hours_per_year: Option<f64>,
    pub electricity_kwh_per_month: Option<f64>,
    pub diet: Option<DietCategory>,
    pub waste_kg_per_month: Option<f64>,

    /// Append the calculation to history
    #[serde(default)]
    pub save: bool,
}

impl EstimateRequest {
    pub fn to_input(&self) -> LifestyleInput {
        let defaults = LifestyleInput::default();
        LifestyleInput {
            car_km_per_year: self.car_km_per_year.unwrap_or(defaults.car_km_per_year),
            air_hours_per_year: self.air_hours_per_year.unwrap_or(defaults.air_hours_per_year),
            electricity_kwh_per_month: self
                .electricity_kwh_per_month
                .unwrap_or(defaults.electricity_kwh_per_month),
            diet: self.diet.unwrap_or(defaults.diet),
            waste_kg_per_month: self.waste_kg_per_month.unwrap_or(defaults.waste_kg_per_month),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct AqiQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct ClassifyQuery {
    pub value: f64,
}

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    #[serde(default = "default_top")]
    pub top: usize,
}

fn default_top() -> usize {
    ecotrack_core::dataset::TOP_N
}
