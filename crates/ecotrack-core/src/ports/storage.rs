use async_trait::async_trait;

use crate::error::Result;
use crate::models::{CalculationRecord, HistoryEntry};

/// Port for the bounded, newest-first calculation history
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Load all entries, newest first
    async fn load(&self) -> Result<Vec<HistoryEntry>>;

    /// Insert an entry at the front and trim to capacity
    async fn append(&self, entry: HistoryEntry) -> Result<()>;

    /// Maximum number of entries retained
    fn capacity(&self) -> usize;
}

/// Port for the progress tracker's calculation log
#[async_trait]
pub trait CalculationLog: Send + Sync {
    /// Load all records in stored order
    async fn load(&self) -> Result<Vec<CalculationRecord>>;

    /// Append a record
    async fn append(&self, record: CalculationRecord) -> Result<()>;

    /// Append, in order, the records whose timestamp is not logged yet.
    ///
    /// The check and the writes form one step with respect to other writers
    /// of the same log. Returns the number of records appended.
    async fn append_missing(&self, records: Vec<CalculationRecord>) -> Result<usize>;
}
