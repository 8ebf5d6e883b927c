//! Integration tests for the JSON file store
//!
//! These exercise the on-disk layout and the retention rules through the
//! persistence ports only.

use chrono::{Duration, TimeZone, Utc};
use ecotrack_core::estimator::estimate;
use ecotrack_core::models::{
    CalculationRecord, DietCategory, HistoryEntry, LifestyleInput, CALCULATIONS_KEY, HISTORY_KEY,
};
use ecotrack_core::ports::{CalculationLog, HistoryStore};
use ecotrack_store::JsonFileStore;
use tempfile::TempDir;

fn entry_at(day: i64, car_km: f64) -> HistoryEntry {
    let input = LifestyleInput { car_km_per_year: car_km, ..Default::default() };
    let date = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap() + Duration::days(day);
    HistoryEntry::at(date, input, estimate(&input).breakdown)
}

#[tokio::test]
async fn test_history_keeps_fifty_newest() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path());

    for i in 0..51 {
        HistoryStore::append(&store, entry_at(i, i as f64 * 100.0)).await.unwrap();
    }

    let history = HistoryStore::load(&store).await.unwrap();
    assert_eq!(history.len(), 50);
    assert_eq!(history[0].inputs.car_km_per_year, 5000.0);
    assert_eq!(history.last().unwrap().inputs.car_km_per_year, 100.0);

    // Newest first means dates descend
    for pair in history.windows(2) {
        assert!(pair[0].date > pair[1].date);
    }
}

#[tokio::test]
async fn test_custom_capacity() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::with_capacity(dir.path(), 3);

    for i in 0..5 {
        HistoryStore::append(&store, entry_at(i, i as f64)).await.unwrap();
    }

    let totals: Vec<f64> = HistoryStore::load(&store)
        .await
        .unwrap()
        .iter()
        .map(|e| e.inputs.car_km_per_year)
        .collect();
    assert_eq!(totals, vec![4.0, 3.0, 2.0]);
}

#[tokio::test]
async fn test_history_file_uses_camel_case_fields() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path());

    let mut saved = entry_at(0, 8000.0);
    saved.inputs.diet = DietCategory::Vegan;
    HistoryStore::append(&store, saved).await.unwrap();

    let raw = std::fs::read_to_string(dir.path().join(format!("{}.json", HISTORY_KEY))).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let first = &value[0];

    assert!(first["id"].is_string());
    assert!(first["date"].is_string());
    assert_eq!(first["inputs"]["carKmPerYear"], 8000.0);
    assert_eq!(first["inputs"]["diet"], "vegan");
    assert!(first["breakdown"]["transport"].is_number());
    assert!(first["total"].is_number());
}

#[tokio::test]
async fn test_calculation_log_appends_in_order() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path());

    let first = CalculationRecord::from_history_entry(&entry_at(0, 1000.0));
    let second = CalculationRecord::from_history_entry(&entry_at(1, 2000.0));
    CalculationLog::append(&store, first.clone()).await.unwrap();
    CalculationLog::append(&store, second.clone()).await.unwrap();

    let timestamps: Vec<_> =
        CalculationLog::load(&store).await.unwrap().iter().map(|r| r.timestamp).collect();
    assert_eq!(timestamps, vec![first.timestamp, second.timestamp]);
    assert!(!dir.path().join(format!("{}.json", HISTORY_KEY)).exists());
    assert!(dir.path().join(format!("{}.json", CALCULATIONS_KEY)).exists());
}

#[tokio::test]
async fn test_malformed_calculation_log_reads_empty() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(format!("{}.json", CALCULATIONS_KEY)), "[{\"oops\": 1}]").unwrap();

    let store = JsonFileStore::new(dir.path());
    assert!(CalculationLog::load(&store).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_store_reopens_existing_data() {
    let dir = TempDir::new().unwrap();
    {
        let store = JsonFileStore::new(dir.path());
        HistoryStore::append(&store, entry_at(0, 10.0)).await.unwrap();
    }

    let reopened = JsonFileStore::new(dir.path());
    assert_eq!(HistoryStore::load(&reopened).await.unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_append_missing_logs_each_record_once() {
    let dir = TempDir::new().unwrap();
    let store = std::sync::Arc::new(JsonFileStore::new(dir.path()));
    let records: Vec<CalculationRecord> = (0..20)
        .map(|i| CalculationRecord::from_history_entry(&entry_at(i, i as f64 * 10.0)))
        .collect();

    let tasks: Vec<_> = (0..4)
        .map(|_| {
            let store = store.clone();
            let records = records.clone();
            tokio::spawn(async move { store.append_missing(records).await.unwrap() })
        })
        .collect();

    let mut added = 0;
    for task in tasks {
        added += task.await.unwrap();
    }

    assert_eq!(added, 20);
    assert_eq!(CalculationLog::load(store.as_ref()).await.unwrap().len(), 20);
}
