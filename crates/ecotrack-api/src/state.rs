use ecotrack_core::aqi::AirQualityMonitor;
use ecotrack_core::ports::{CalculationLog, HistoryStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub history: Arc<dyn HistoryStore>,
    pub calculations: Arc<dyn CalculationLog>,
    pub air_quality: Arc<AirQualityMonitor>,
}

impl AppState {
    pub fn new(
        history: Arc<dyn HistoryStore>,
        calculations: Arc<dyn CalculationLog>,
        air_quality: AirQualityMonitor,
    ) -> Self {
        Self {
            history,
            calculations,
            air_quality: Arc::new(air_quality),
        }
    }
}
