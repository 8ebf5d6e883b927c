//! File-backed key-value storage.
//!
//! Each logical key is a single `<key>.json` file holding a JSON array under
//! the store's directory. Missing files read as empty lists. Files that fail
//! to parse also read as empty, with a warning, and are replaced on the next
//! write.

use async_trait::async_trait;
use ecotrack_core::error::{EcotrackError, Result};
use ecotrack_core::models::{
    CalculationRecord, HistoryEntry, CALCULATIONS_KEY, DEFAULT_HISTORY_CAPACITY, HISTORY_KEY,
};
use ecotrack_core::ports::{CalculationLog, HistoryStore};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use crate::{extend_unlogged, push_newest};

/// JSON-file implementation of both persistence ports
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
    capacity: usize,
    // Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Create a store rooted at `dir` with the default history capacity
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_capacity(dir, DEFAULT_HISTORY_CAPACITY)
    }

    pub fn with_capacity(dir: impl Into<PathBuf>, capacity: usize) -> Self {
        Self {
            dir: dir.into(),
            capacity: capacity.max(1),
            write_lock: Mutex::new(()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing a key
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    async fn read_list<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        let path = self.path_for(key);
        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(EcotrackError::Io(e)),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str(&content) {
            Ok(list) => Ok(list),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Stored data is not valid JSON, treating it as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    async fn write_list<T: Serialize>(&self, key: &str, list: &[T]) -> Result<()> {
        fs::create_dir_all(&self.dir).await?;

        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{}.json.tmp", key));
        let json = serde_json::to_string(list)?;

        fs::write(&tmp, json).await?;
        fs::rename(&tmp, &path).await?;

        tracing::debug!(path = %path.display(), entries = list.len(), "Wrote stored list");
        Ok(())
    }
}

#[async_trait]
impl HistoryStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<HistoryEntry>> {
        self.read_list(HISTORY_KEY).await
    }

    async fn append(&self, entry: HistoryEntry) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut history: Vec<HistoryEntry> = self.read_list(HISTORY_KEY).await?;
        push_newest(&mut history, entry, self.capacity);
        self.write_list(HISTORY_KEY, &history).await
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

#[async_trait]
impl CalculationLog for JsonFileStore {
    async fn load(&self) -> Result<Vec<CalculationRecord>> {
        self.read_list(CALCULATIONS_KEY).await
    }

    async fn append(&self, record: CalculationRecord) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut records: Vec<CalculationRecord> = self.read_list(CALCULATIONS_KEY).await?;
        records.push(record);
        self.write_list(CALCULATIONS_KEY, &records).await
    }

    async fn append_missing(&self, records: Vec<CalculationRecord>) -> Result<usize> {
        let _guard = self.write_lock.lock().await;
        let mut logged: Vec<CalculationRecord> = self.read_list(CALCULATIONS_KEY).await?;
        let added = extend_unlogged(&mut logged, records);
        if added > 0 {
            self.write_list(CALCULATIONS_KEY, &logged).await?;
        }
        Ok(added)
    }
}
