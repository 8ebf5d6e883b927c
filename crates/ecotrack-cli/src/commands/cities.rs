//! Cities command implementation

use crate::cli::CitiesArgs;
use crate::errors::city_not_found;
use crate::output::{megatonnes, tonnes, OutputWriter};
use crate::output_types::{CitiesOutput, CityRow, LegendRow};
use anyhow::Result;
use ecotrack_core::dataset::{legend, CityView, EmissionsDataset};

pub fn execute(args: CitiesArgs, output: &OutputWriter) -> Result<()> {
    let dataset = EmissionsDataset::india();

    if args.legend {
        let rows = legend();
        if output.is_json() {
            output.result(CitiesOutput::Legend { legend: rows })?;
        } else {
            output.section("Emission Severity");
            output.table(rows.iter().map(LegendRow::from).collect::<Vec<_>>());
        }
        return Ok(());
    }

    if let Some(ref name) = args.city {
        let city = dataset.find(name).ok_or_else(|| city_not_found(name))?;
        let view = CityView::new(city);
        if output.is_json() {
            output.result(CitiesOutput::City { city: view })?;
        } else {
            output.section(city.name);
            output.kv("Location", city.coordinate);
            output.kv("Emissions", megatonnes(city.emissions));
            output.kv("Population", city.population);
            output.kv("Per capita", tonnes(view.per_capita));
            output.kv("Severity", view.severity.label());
        }
        return Ok(());
    }

    if args.all {
        let views = dataset.views();
        if output.is_json() {
            output.result(CitiesOutput::All { cities: views })?;
        } else {
            output.section(format!("All Cities ({})", views.len()));
            output.table(views.iter().map(CityRow::from).collect::<Vec<_>>());
        }
        return Ok(());
    }

    let mut summary = dataset.summary();
    summary.top = dataset.top_emitters(args.top);

    if output.is_json() {
        output.result(CitiesOutput::Summary(summary))?;
        return Ok(());
    }

    output.section("Indian City Emissions");
    output.kv("Cities", summary.city_count);
    output.kv("Total emissions", megatonnes(summary.total_emissions));
    output.kv("Total population", summary.total_population);
    output.kv("Average per capita", tonnes(summary.average_per_capita));

    output.section(format!("Top {} Emitters", summary.top.len()));
    output.table(summary.top.iter().map(CityRow::from).collect::<Vec<_>>());

    Ok(())
}
