//! Progress command implementation

use crate::cli::ProgressArgs;
use crate::output::{tonnes, OutputWriter};
use crate::output_types::{ProgressOutput, TrendRow};
use crate::storage::Storage;
use anyhow::{Context, Result};
use ecotrack_core::config::LayeredConfig;
use ecotrack_core::progress::{ProgressTracker, MIN_TREND_RECORDS};

pub async fn execute(args: ProgressArgs, output: &OutputWriter, config: &LayeredConfig) -> Result<()> {
    let storage = Storage::open(config);
    let records = storage
        .calculations
        .load()
        .await
        .context("Failed to load calculation log")?;
    let tracker = ProgressTracker::new(records);

    if output.is_json() {
        output.result(ProgressOutput {
            records: tracker.len(),
            stats: tracker.stats(),
            trend: if tracker.has_trend() { tracker.trend() } else { Vec::new() },
        })?;
        return Ok(());
    }

    let Some(stats) = tracker.stats() else {
        output.info("No calculations recorded yet");
        output.info("Import saved history with: ecotrack migrate");
        return Ok(());
    };

    output.section("Progress");
    output.kv("Records", tracker.len());
    output.kv("First", tonnes(stats.first));
    output.kv("Current", tonnes(stats.current));
    output.kv("Change", format!("{:+.1}%", stats.change_pct));
    output.kv(
        "Progress to target",
        format!("{:.0}% (target {})", stats.progress_to_target, tonnes(stats.target)),
    );

    if args.trend {
        output.section("Trend");
        if tracker.has_trend() {
            output.table(tracker.trend().iter().map(TrendRow::from).collect::<Vec<_>>());
        } else {
            output.info(format!(
                "A trend needs at least {} calculations",
                MIN_TREND_RECORDS
            ));
        }
    }

    Ok(())
}
