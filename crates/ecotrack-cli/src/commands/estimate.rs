//! Estimate command implementation

use crate::cli::EstimateArgs;
use crate::errors::from_core;
use crate::output::{tonnes, OutputWriter};
use crate::output_types::EstimateOutput;
use crate::storage::Storage;
use anyhow::{Context, Result};
use ecotrack_core::config::LayeredConfig;
use ecotrack_core::estimator::{Calculator, TARGET_TONNES};
use ecotrack_core::models::{DietCategory, HistoryEntry, LifestyleInput};

pub async fn execute(args: EstimateArgs, output: &OutputWriter, config: &LayeredConfig) -> Result<()> {
    let input = build_input(&args, output);
    let calculator = Calculator::new(input).map_err(from_core)?;
    let estimate = calculator.estimate();

    let saved_id = if args.save {
        let storage = Storage::open(config);
        let entry = HistoryEntry::new(*calculator.input(), estimate.breakdown);
        let id = entry.id;
        storage.history.append(entry).await.context("Failed to save calculation")?;
        tracing::info!(%id, total = estimate.total, "Saved calculation to history");
        Some(id)
    } else {
        None
    };

    if output.is_json() {
        output.result(EstimateOutput {
            input: *calculator.input(),
            estimate: estimate.clone(),
            saved_id,
        })?;
        return Ok(());
    }

    output.section("Annual Footprint");
    for (category, value) in estimate.breakdown.entries() {
        output.kv(category.label(), tonnes(value));
    }
    output.kv("Total", tonnes(estimate.total));
    output.kv(
        "Versus global average",
        format!("{} ({} average)", estimate.comparison, tonnes(estimate.comparison.global_average)),
    );
    output.kv(
        "Progress to target",
        format!("{:.0}% of the way to {}", estimate.progress_to_target, tonnes(TARGET_TONNES)),
    );
    output.kv("Largest source", estimate.dominant.label());

    output.section("Tips");
    for tip in &estimate.tips {
        output.info(tip.message());
    }

    if let Some(id) = saved_id {
        output.success(format!("Saved to history ({})", id));
    }

    Ok(())
}

/// Start from the default lifestyle and apply the given flags
fn build_input(args: &EstimateArgs, output: &OutputWriter) -> LifestyleInput {
    let mut input = LifestyleInput::default();

    if let Some(km) = args.car_km {
        input.car_km_per_year = km;
    }
    if let Some(hours) = args.air_hours {
        input.air_hours_per_year = hours;
    }
    if let Some(kwh) = args.electricity_kwh {
        input.electricity_kwh_per_month = kwh;
    }
    if let Some(kg) = args.waste_kg {
        input.waste_kg_per_month = kg;
    }
    if let Some(ref diet) = args.diet {
        input.diet = DietCategory::from_key(diet);
        if input.diet == DietCategory::Unrecognized {
            output.warning(format!(
                "Unknown diet '{}', counting {}",
                diet,
                tonnes(input.diet.tonnes())
            ));
        }
    }

    input
}
