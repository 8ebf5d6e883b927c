use ecotrack_core::config::LayeredConfig;
use ecotrack_core::ports::{CalculationLog, HistoryStore};
use ecotrack_store::JsonFileStore;
use std::sync::Arc;

/// Persistence adapters for the configured data directory
pub struct Storage {
    pub history: Arc<dyn HistoryStore>,
    pub calculations: Arc<dyn CalculationLog>,
}

impl Storage {
    pub fn open(config: &LayeredConfig) -> Self {
        let store = Arc::new(JsonFileStore::with_capacity(
            config.data_dir.value.clone(),
            config.history_capacity.value,
        ));
        tracing::debug!(dir = %store.dir().display(), "Opened data directory");

        Self {
            history: store.clone(),
            calculations: store,
        }
    }
}
