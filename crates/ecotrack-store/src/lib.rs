//! EcoTrack Store - Persistence adapters
//!
//! This crate provides adapter implementations of the history and calculation
//! log ports defined in `ecotrack-core`.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use chrono::{DateTime, Utc};
use ecotrack_core::models::{CalculationRecord, HistoryEntry};
use std::collections::HashSet;

/// Insert an entry at the front of a newest-first list and trim it to capacity
pub(crate) fn push_newest(entries: &mut Vec<HistoryEntry>, entry: HistoryEntry, capacity: usize) {
    entries.insert(0, entry);
    entries.truncate(capacity);
}

/// Append records whose timestamp is not in `log`, including earlier records
/// of the same batch. Returns how many were appended.
pub(crate) fn extend_unlogged(
    log: &mut Vec<CalculationRecord>,
    records: Vec<CalculationRecord>,
) -> usize {
    let mut seen: HashSet<DateTime<Utc>> = log.iter().map(|r| r.timestamp).collect();
    let before = log.len();
    log.extend(records.into_iter().filter(|r| seen.insert(r.timestamp)));
    log.len() - before
}
