use std::sync::Arc;

use axum::{extract::State, Json};
use ecotrack_core::estimator::try_estimate;
use ecotrack_core::models::HistoryEntry;

use crate::dto::{EstimateRequest, EstimateResponse};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn estimate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<EstimateRequest>,
) -> Result<Json<EstimateResponse>, ApiError> {
    let input = request.to_input();
    let estimate = try_estimate(&input)?;

    let saved = if request.save {
        let entry = HistoryEntry::new(input, estimate.breakdown);
        state.history.append(entry.clone()).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to save calculation");
            ApiError::internal("Failed to save calculation").with_details(e.to_string())
        })?;
        tracing::info!(id = %entry.id, total = entry.total, "Saved calculation");
        Some(entry)
    } else {
        None
    };

    Ok(Json(EstimateResponse { input, estimate, saved }))
}
