//! In-memory storage implementations for development and testing.
//!
//! These implementations use `RwLock::unwrap()` intentionally. Lock poisoning
//! only occurs when another thread panicked while holding the lock, which is
//! an unrecoverable state. For data that must survive restarts, use
//! [`JsonFileStore`](crate::JsonFileStore).

use async_trait::async_trait;
use ecotrack_core::error::Result;
use ecotrack_core::models::{CalculationRecord, HistoryEntry, DEFAULT_HISTORY_CAPACITY};
use ecotrack_core::ports::{CalculationLog, HistoryStore};
use std::sync::{Arc, RwLock};

use crate::{extend_unlogged, push_newest};

/// In-memory implementation of both persistence ports
#[derive(Debug, Clone)]
pub struct MemoryStore {
    history: Arc<RwLock<Vec<HistoryEntry>>>,
    calculations: Arc<RwLock<Vec<CalculationRecord>>>,
    capacity: usize,
}

impl MemoryStore {
    /// Create a new in-memory store with the default history capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            history: Arc::default(),
            calculations: Arc::default(),
            capacity: capacity.max(1),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryStore for MemoryStore {
    async fn load(&self) -> Result<Vec<HistoryEntry>> {
        Ok(self.history.read().unwrap().clone())
    }

    async fn append(&self, entry: HistoryEntry) -> Result<()> {
        let mut history = self.history.write().unwrap();
        push_newest(&mut history, entry, self.capacity);
        Ok(())
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

#[async_trait]
impl CalculationLog for MemoryStore {
    async fn load(&self) -> Result<Vec<CalculationRecord>> {
        Ok(self.calculations.read().unwrap().clone())
    }

    async fn append(&self, record: CalculationRecord) -> Result<()> {
        self.calculations.write().unwrap().push(record);
        Ok(())
    }

    async fn append_missing(&self, records: Vec<CalculationRecord>) -> Result<usize> {
        let mut calculations = self.calculations.write().unwrap();
        Ok(extend_unlogged(&mut calculations, records))
    }
}
