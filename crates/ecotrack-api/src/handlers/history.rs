use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::dto::{HistoryQuery, HistoryResponse};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_history(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let history = state.history.load().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to load history");
        ApiError::internal("Failed to load history").with_details(e.to_string())
    })?;

    let total_entries = history.len();
    let entries = history.into_iter().take(query.limit.unwrap_or(usize::MAX)).collect();

    Ok(Json(HistoryResponse {
        capacity: state.history.capacity(),
        total_entries,
        entries,
    }))
}
