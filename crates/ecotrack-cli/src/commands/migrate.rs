//! Migrate command implementation

use crate::cli::MigrateArgs;
use crate::output::OutputWriter;
use crate::output_types::MigrateOutput;
use crate::storage::Storage;
use anyhow::{Context, Result};
use ecotrack_core::config::LayeredConfig;
use ecotrack_core::progress::pending_migration;

pub async fn execute(args: MigrateArgs, output: &OutputWriter, config: &LayeredConfig) -> Result<()> {
    let storage = Storage::open(config);
    let history = storage.history.load().await.context("Failed to load history")?;
    let existing = storage
        .calculations
        .load()
        .await
        .context("Failed to load calculation log")?;

    let migrated = if args.dry_run {
        pending_migration(&history, &existing).len()
    } else {
        let migrated = storage
            .calculations
            .append_missing(pending_migration(&history, &existing))
            .await
            .context("Failed to append to calculation log")?;
        tracing::info!(migrated, "Migrated history into calculation log");
        migrated
    };
    let skipped = history.len() - migrated;

    if output.is_json() {
        output.result(MigrateOutput {
            history_entries: history.len(),
            migrated,
            skipped,
            dry_run: args.dry_run,
        })?;
    } else if args.dry_run {
        output.info(format!(
            "Would copy {} of {} history entries ({} already logged)",
            migrated,
            history.len(),
            skipped
        ));
    } else {
        output.success(format!(
            "Copied {} history entries into the calculation log ({} already logged)",
            migrated, skipped
        ));
    }

    Ok(())
}
