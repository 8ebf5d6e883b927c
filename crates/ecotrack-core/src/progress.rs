//! Footprint progress over the calculation log

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::collections::HashSet;

use crate::estimator::{progress_to_target, TARGET_TONNES};
use crate::models::{CalculationRecord, HistoryEntry};

/// Minimum number of records before a trend is meaningful
pub const MIN_TREND_RECORDS: usize = 2;

/// Headline figures comparing the first and latest records
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressStats {
    pub first: f64,
    pub current: f64,

    /// Percentage change from first to current; a zero first total counts as one
    pub change_pct: f64,

    /// Progress of the current total towards the target, in `[0, 100]`
    pub progress_to_target: f64,

    pub target: f64,
}

/// One point of the trend series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub timestamp: DateTime<Utc>,
    pub total: f64,
    pub transport: f64,
    pub energy: f64,
    pub diet: f64,
    pub waste: f64,
}

impl From<&CalculationRecord> for TrendPoint {
    fn from(record: &CalculationRecord) -> Self {
        Self {
            date: record.timestamp.date_naive(),
            timestamp: record.timestamp,
            total: record.total,
            transport: record.breakdown.transport(),
            energy: record.breakdown.energy,
            diet: record.breakdown.diet,
            waste: record.breakdown.waste,
        }
    }
}

/// Calculation records ordered oldest first
#[derive(Debug, Clone, Default)]
pub struct ProgressTracker {
    records: Vec<CalculationRecord>,
}

impl ProgressTracker {
    /// Order records by timestamp; equal timestamps keep their stored order
    pub fn new(mut records: Vec<CalculationRecord>) -> Self {
        records.sort_by_key(|r| r.timestamp);
        Self { records }
    }

    pub fn records(&self) -> &[CalculationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `None` when there are no records
    pub fn stats(&self) -> Option<ProgressStats> {
        let first = self.records.first()?;
        let last = self.records.last()?;

        let baseline = if first.total == 0.0 { 1.0 } else { first.total };
        Some(ProgressStats {
            first: first.total,
            current: last.total,
            change_pct: (last.total - first.total) / baseline * 100.0,
            progress_to_target: progress_to_target(last.total),
            target: TARGET_TONNES,
        })
    }

    pub fn has_trend(&self) -> bool {
        self.records.len() >= MIN_TREND_RECORDS
    }

    pub fn trend(&self) -> Vec<TrendPoint> {
        self.records.iter().map(TrendPoint::from).collect()
    }
}

/// Records to append when copying history into the calculation log.
///
/// `history` is newest first; the result is oldest first. Entries whose
/// timestamp is already logged are left out, so repeating a migration adds
/// nothing.
pub fn pending_migration(
    history: &[HistoryEntry],
    logged: &[CalculationRecord],
) -> Vec<CalculationRecord> {
    let seen: HashSet<DateTime<Utc>> = logged.iter().map(|r| r.timestamp).collect();

    history
        .iter()
        .rev()
        .filter(|entry| !seen.contains(&entry.date))
        .map(CalculationRecord::from_history_entry)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CalculationBreakdown;
    use chrono::TimeZone;

    fn record(day: u32, total: f64) -> CalculationRecord {
        CalculationRecord {
            timestamp: Utc.with_ymd_and_hms(2025, 3, day, 12, 0, 0).unwrap(),
            total,
            breakdown: CalculationBreakdown {
                car: total * 0.2,
                air: total * 0.1,
                energy: total * 0.2,
                diet: total * 0.4,
                waste: total * 0.1,
            },
        }
    }

    #[test]
    fn test_empty_log_has_no_stats() {
        let tracker = ProgressTracker::new(Vec::new());
        assert!(tracker.stats().is_none());
        assert!(!tracker.has_trend());
    }

    #[test]
    fn test_records_sorted_by_timestamp() {
        let tracker = ProgressTracker::new(vec![record(9, 5.0), record(1, 8.0), record(4, 6.0)]);
        let totals: Vec<f64> = tracker.records().iter().map(|r| r.total).collect();
        assert_eq!(totals, vec![8.0, 6.0, 5.0]);
    }

    #[test]
    fn test_stats_change_and_target() {
        let tracker = ProgressTracker::new(vec![record(1, 8.0), record(2, 4.0)]);
        let stats = tracker.stats().unwrap();
        assert_eq!(stats.first, 8.0);
        assert_eq!(stats.current, 4.0);
        assert_eq!(stats.change_pct, -50.0);
        assert_eq!(stats.progress_to_target, 50.0);
        assert!(tracker.has_trend());
    }

    #[test]
    fn test_single_record_stats() {
        let tracker = ProgressTracker::new(vec![record(1, 1.0)]);
        let stats = tracker.stats().unwrap();
        assert_eq!(stats.change_pct, 0.0);
        assert_eq!(stats.progress_to_target, 100.0);
        assert!(!tracker.has_trend());
    }

    #[test]
    fn test_zero_baseline_is_guarded() {
        let tracker = ProgressTracker::new(vec![record(1, 0.0), record(2, 3.0)]);
        let stats = tracker.stats().unwrap();
        assert_eq!(stats.change_pct, 300.0);
        assert!(stats.change_pct.is_finite());
    }

    #[test]
    fn test_pending_migration_is_oldest_first_and_idempotent() {
        use crate::estimator::estimate;
        use crate::models::LifestyleInput;

        let input = LifestyleInput::default();
        let breakdown = estimate(&input).breakdown;
        let older = HistoryEntry::at(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(), input, breakdown);
        let newer = HistoryEntry::at(Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap(), input, breakdown);
        let history = vec![newer.clone(), older.clone()];

        let pending = pending_migration(&history, &[]);
        assert_eq!(pending.len(), 2);
        assert_eq!(pending[0].timestamp, older.date);
        assert_eq!(pending[1].timestamp, newer.date);

        let logged = vec![CalculationRecord::from_history_entry(&older)];
        let remaining = pending_migration(&history, &logged);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].timestamp, newer.date);

        assert!(pending_migration(&history, &pending).is_empty());
    }

    #[test]
    fn test_trend_combines_car_and_air() {
        let tracker = ProgressTracker::new(vec![record(2, 10.0)]);
        let point = &tracker.trend()[0];
        assert!((point.transport - 3.0).abs() < 1e-12);
        assert_eq!(point.date, NaiveDate::from_ymd_opt(2025, 3, 2).unwrap());
    }
}
