use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use ecotrack_air::{CachedLocation, FixedLocation, OpenMeteoClient};
use ecotrack_core::aqi::AirQualityMonitor;
use ecotrack_core::ports::{CalculationLog, HistoryStore, LocationProvider};
use ecotrack_store::{JsonFileStore, MemoryStore};
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ecotrack_api::{create_router, ApiConfig, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ecotrack_api=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env()?;
    let settings = &config.ecotrack;

    tracing::info!(
        port = config.port,
        aqi_endpoint = %settings.aqi_endpoint.value,
        "Starting EcoTrack API server"
    );

    let (history, calculations): (Arc<dyn HistoryStore>, Arc<dyn CalculationLog>) = if config.persist {
        let store = Arc::new(JsonFileStore::with_capacity(
            settings.data_dir.value.clone(),
            settings.history_capacity.value,
        ));
        tracing::info!(dir = %store.dir().display(), "Using JSON file storage");
        (store.clone(), store)
    } else {
        tracing::info!("Using in-memory storage (set ECOTRACK_DATA_DIR to persist)");
        let store = Arc::new(MemoryStore::with_capacity(settings.history_capacity.value));
        (store.clone(), store)
    };

    let location: Option<Arc<dyn LocationProvider>> = match settings.location()? {
        Some(coordinate) => {
            tracing::info!(%coordinate, "Using configured location");
            let fixed = FixedLocation::new(coordinate)?;
            Some(Arc::new(CachedLocation::new(fixed)) as Arc<dyn LocationProvider>)
        }
        None => {
            tracing::info!("No location configured; /api/v1/aqi requires lat and lon");
            None
        }
    };

    let monitor = AirQualityMonitor::new(
        location,
        Arc::new(OpenMeteoClient::new(settings.aqi_endpoint.value.clone())),
        settings.location_options(),
    );

    let state = Arc::new(AppState::new(history, calculations, monitor));

    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid ECOTRACK_CORS_ORIGIN '{}'", config.cors_origin))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let app = create_router(state).layer(cors);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("CORS enabled for {}", config.cors_origin);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
