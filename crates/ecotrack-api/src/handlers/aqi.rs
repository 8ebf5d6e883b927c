use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use ecotrack_core::aqi::{classify, AirQualityReport};
use ecotrack_core::models::{AqiClassification, Coordinate};

use crate::dto::{AqiQuery, ClassifyQuery};
use crate::error::ApiError;
use crate::state::AppState;

/// Air quality at `lat`/`lon`, or at the configured location when both are omitted
pub async fn current_aqi(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AqiQuery>,
) -> Result<Json<AirQualityReport>, ApiError> {
    let report = match (query.lat, query.lon) {
        (Some(lat), Some(lon)) => state.air_quality.report_at(Coordinate::new(lat, lon)).await,
        (None, None) => state.air_quality.current_report().await,
        _ => return Err(ApiError::bad_request("lat and lon must be given together")),
    };

    let report = report.map_err(|e| {
        tracing::warn!(error = %e, "Air quality lookup failed");
        ApiError::from(e)
    })?;
    Ok(Json(report))
}

pub async fn classify_aqi(
    Query(query): Query<ClassifyQuery>,
) -> Result<Json<AqiClassification>, ApiError> {
    Ok(Json(classify(query.value)?))
}
