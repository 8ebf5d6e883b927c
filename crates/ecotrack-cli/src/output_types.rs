use chrono::{DateTime, Utc};
use ecotrack_core::aqi::AirQualityReport;
use ecotrack_core::config::ConfigSource;
use ecotrack_core::dataset::{CityView, DatasetSummary, LegendEntry};
use ecotrack_core::estimator::Estimate;
use ecotrack_core::models::{HistoryEntry, LifestyleInput};
use ecotrack_core::progress::{ProgressStats, TrendPoint};
use serde::Serialize;
use std::collections::BTreeMap;
use tabled::Tabled;
use uuid::Uuid;

use crate::output::{megatonnes, tonnes};

/// Output for estimate command
#[derive(Debug, Serialize)]
pub struct EstimateOutput {
    pub input: LifestyleInput,
    pub estimate: Estimate,
    pub saved_id: Option<Uuid>,
}

/// Output for history command
#[derive(Debug, Serialize)]
pub struct HistoryOutput {
    pub capacity: usize,
    pub total_entries: usize,
    pub entries: Vec<HistoryEntry>,
}

/// Output for progress command
#[derive(Debug, Serialize)]
pub struct ProgressOutput {
    pub records: usize,
    pub stats: Option<ProgressStats>,
    pub trend: Vec<TrendPoint>,
}

/// Output for aqi command
#[derive(Debug, Serialize)]
pub struct AqiOutput {
    #[serde(flatten)]
    pub report: AirQualityReport,
    pub source: String,
}

/// Output for cities command
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CitiesOutput<'a> {
    Summary(DatasetSummary<'a>),
    All {
        cities: Vec<CityView<'a>>,
    },
    City {
        city: CityView<'a>,
    },
    Legend {
        legend: Vec<LegendEntry>,
    },
}

/// Output for migrate command
#[derive(Debug, Serialize)]
pub struct MigrateOutput {
    pub history_entries: usize,
    pub migrated: usize,
    pub skipped: usize,
    pub dry_run: bool,
}

/// Output for config command
#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    pub config_file: String,
    pub values: BTreeMap<String, ConfigEntry>,
}

#[derive(Debug, Serialize)]
pub struct ConfigEntry {
    pub value: String,
    pub source: ConfigSource,
}

#[derive(Tabled)]
pub struct HistoryRow {
    #[tabled(rename = "Saved")]
    pub date: String,
    #[tabled(rename = "Total")]
    pub total: String,
    #[tabled(rename = "Transport")]
    pub transport: String,
    #[tabled(rename = "Energy")]
    pub energy: String,
    #[tabled(rename = "Diet")]
    pub diet: String,
    #[tabled(rename = "Waste")]
    pub waste: String,
}

impl From<&HistoryEntry> for HistoryRow {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            date: format_time(entry.date),
            total: tonnes(entry.total),
            transport: tonnes(entry.breakdown.transport),
            energy: tonnes(entry.breakdown.energy),
            diet: format!("{} ({})", tonnes(entry.breakdown.diet), entry.inputs.diet.label()),
            waste: tonnes(entry.breakdown.waste),
        }
    }
}

#[derive(Tabled)]
pub struct TrendRow {
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Total")]
    pub total: String,
    #[tabled(rename = "Transport")]
    pub transport: String,
    #[tabled(rename = "Energy")]
    pub energy: String,
    #[tabled(rename = "Diet")]
    pub diet: String,
    #[tabled(rename = "Waste")]
    pub waste: String,
}

impl From<&TrendPoint> for TrendRow {
    fn from(point: &TrendPoint) -> Self {
        Self {
            date: point.date.to_string(),
            total: tonnes(point.total),
            transport: tonnes(point.transport),
            energy: tonnes(point.energy),
            diet: tonnes(point.diet),
            waste: tonnes(point.waste),
        }
    }
}

#[derive(Tabled)]
pub struct CityRow {
    #[tabled(rename = "City")]
    pub name: &'static str,
    #[tabled(rename = "Emissions")]
    pub emissions: String,
    #[tabled(rename = "Population")]
    pub population: u64,
    #[tabled(rename = "Per capita")]
    pub per_capita: String,
    #[tabled(rename = "Severity")]
    pub severity: &'static str,
    #[tabled(rename = "Sources")]
    pub sources: String,
}

impl From<&CityView<'_>> for CityRow {
    fn from(view: &CityView<'_>) -> Self {
        Self {
            name: view.city.name,
            emissions: megatonnes(view.city.emissions),
            population: view.city.population,
            per_capita: tonnes(view.per_capita),
            severity: view.severity.label(),
            sources: view
                .city
                .sources
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

#[derive(Tabled)]
pub struct LegendRow {
    #[tabled(rename = "Severity")]
    pub label: &'static str,
    #[tabled(rename = "Range")]
    pub range: String,
    #[tabled(rename = "Colour")]
    pub color: &'static str,
}

impl From<&LegendEntry> for LegendRow {
    fn from(entry: &LegendEntry) -> Self {
        let range = match entry.upper_bound {
            Some(upper) => format!("{} – {}", megatonnes(entry.lower_bound), megatonnes(upper)),
            None => format!("≥ {}", megatonnes(entry.lower_bound)),
        };
        Self { label: entry.label, range, color: entry.color }
    }
}

#[derive(Tabled)]
pub struct PollutantRow {
    #[tabled(rename = "Pollutant")]
    pub pollutant: &'static str,
    #[tabled(rename = "Value")]
    pub value: String,
}

#[derive(Tabled)]
pub struct ConfigRow {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Source")]
    pub source: String,
}

pub fn format_time(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecotrack_core::dataset::{legend, EmissionsDataset};

    #[test]
    fn test_city_row_formatting() {
        let dataset = EmissionsDataset::india();
        let view = CityView::new(dataset.find("Delhi").unwrap());
        let row = CityRow::from(&view);
        assert_eq!(row.emissions, "64.0 Mt");
        assert_eq!(row.severity, "Very High");
        assert_eq!(row.sources, "transport, industry, power");
    }

    #[test]
    fn test_legend_rows_cover_open_range() {
        let rows: Vec<LegendRow> = legend().iter().map(LegendRow::from).collect();
        assert_eq!(rows.len(), 4);
        assert!(rows[3].range.starts_with('≥'));
    }
}
