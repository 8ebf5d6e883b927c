//! History command implementation

use crate::cli::HistoryArgs;
use crate::output::OutputWriter;
use crate::output_types::{HistoryOutput, HistoryRow};
use crate::storage::Storage;
use anyhow::{Context, Result};
use ecotrack_core::config::LayeredConfig;

pub async fn execute(args: HistoryArgs, output: &OutputWriter, config: &LayeredConfig) -> Result<()> {
    let storage = Storage::open(config);
    let history = storage.history.load().await.context("Failed to load history")?;
    let total_entries = history.len();

    let entries: Vec<_> = match args.limit {
        Some(limit) => history.into_iter().take(limit).collect(),
        None => history,
    };

    if output.is_json() {
        output.result(HistoryOutput {
            capacity: storage.history.capacity(),
            total_entries,
            entries,
        })?;
        return Ok(());
    }

    output.section(format!(
        "History ({} of {} saved, keeps {})",
        entries.len(),
        total_entries,
        storage.history.capacity()
    ));
    output.table(entries.iter().map(HistoryRow::from).collect::<Vec<_>>());

    if total_entries == 0 {
        output.info("Save a calculation with: ecotrack estimate --save");
    }

    Ok(())
}
