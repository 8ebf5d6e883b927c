use ecotrack_core::estimator::Estimate;
use ecotrack_core::models::{HistoryEntry, LifestyleInput};
use ecotrack_core::progress::{ProgressStats, TrendPoint};
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self { status: "ok", service: "ecotrack-api" }
    }
}

/// Estimate response
#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub input: LifestyleInput,
    pub estimate: Estimate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved: Option<HistoryEntry>,
}

/// Saved history, newest first
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub capacity: usize,
    pub total_entries: usize,
    pub entries: Vec<HistoryEntry>,
}

/// Progress over the calculation log
#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub records: usize,
    pub stats: Option<ProgressStats>,
    pub trend: Vec<TrendPoint>,
}

/// Result of copying history into the calculation log
#[derive(Debug, Serialize)]
pub struct MigrateResponse {
    pub history_entries: usize,
    pub migrated: usize,
    pub skipped: usize,
}
