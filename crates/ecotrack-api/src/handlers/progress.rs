use std::sync::Arc;

use axum::{extract::State, Json};
use ecotrack_core::progress::{pending_migration, ProgressTracker};

use crate::dto::{MigrateResponse, ProgressResponse};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn get_progress(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ProgressResponse>, ApiError> {
    let records = state.calculations.load().await?;
    let tracker = ProgressTracker::new(records);

    Ok(Json(ProgressResponse {
        records: tracker.len(),
        stats: tracker.stats(),
        trend: if tracker.has_trend() { tracker.trend() } else { Vec::new() },
    }))
}

/// Copy saved history into the calculation log
pub async fn migrate_history(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MigrateResponse>, ApiError> {
    let history = state.history.load().await?;
    let migrated = state
        .calculations
        .append_missing(pending_migration(&history, &[]))
        .await?;
    tracing::info!(migrated, "Migrated history into calculation log");

    Ok(Json(MigrateResponse {
        history_entries: history.len(),
        migrated,
        skipped: history.len() - migrated,
    }))
}
