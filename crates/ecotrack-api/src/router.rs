use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health_check))

        // Footprint
        .route("/api/v1/estimate", post(handlers::estimate))
        .route("/api/v1/history", get(handlers::list_history))
        .route("/api/v1/progress", get(handlers::get_progress))
        .route("/api/v1/progress/migrate", post(handlers::migrate_history))

        // Air quality
        .route("/api/v1/aqi", get(handlers::current_aqi))
        .route("/api/v1/aqi/classify", get(handlers::classify_aqi))

        // City dataset
        .route("/api/v1/cities", get(handlers::list_cities))
        .route("/api/v1/cities/summary", get(handlers::city_summary))
        .route("/api/v1/cities/legend", get(handlers::city_legend))
        .route("/api/v1/cities/{name}", get(handlers::get_city))

        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
