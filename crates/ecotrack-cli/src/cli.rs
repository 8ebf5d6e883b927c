use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// EcoTrack - Personal carbon footprint and air quality
#[derive(Parser, Debug)]
#[command(name = "ecotrack")]
#[command(about = "Personal carbon footprint and air quality", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding saved data and config.toml
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate an annual carbon footprint
    Estimate(EstimateArgs),

    /// Show saved calculations, newest first
    History(HistoryArgs),

    /// Show progress over the calculation log
    Progress(ProgressArgs),

    /// Fetch and classify current air quality
    Aqi(AqiArgs),

    /// Classify an AQI value
    Classify(ClassifyArgs),

    /// Explore emissions of Indian cities
    Cities(CitiesArgs),

    /// Copy saved history into the calculation log
    Migrate(MigrateArgs),

    /// Show the effective configuration and where each value comes from
    Config,
}

#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// Car distance per year (km)
    #[arg(long, value_name = "KM")]
    pub car_km: Option<f64>,

    /// Flight time per year (hours)
    #[arg(long, value_name = "HOURS")]
    pub air_hours: Option<f64>,

    /// Electricity use per month (kWh)
    #[arg(long, value_name = "KWH")]
    pub electricity_kwh: Option<f64>,

    /// Diet (vegan, vegetarian, light, medium, heavy)
    #[arg(long)]
    pub diet: Option<String>,

    /// Waste per month (kg)
    #[arg(long, value_name = "KG")]
    pub waste_kg: Option<f64>,

    /// Save the calculation to history
    #[arg(long)]
    pub save: bool,
}

#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Maximum number of entries to show
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

#[derive(Args, Debug)]
pub struct ProgressArgs {
    /// Show the per-record trend
    #[arg(long)]
    pub trend: bool,
}

#[derive(Args, Debug)]
pub struct AqiArgs {
    /// Latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true, requires = "lon")]
    pub lat: Option<f64>,

    /// Longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true, requires = "lat")]
    pub lon: Option<f64>,

    /// Air quality endpoint URL
    #[arg(long)]
    pub endpoint: Option<String>,
}

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// US AQI value
    #[arg(allow_hyphen_values = true)]
    pub value: f64,
}

#[derive(Args, Debug)]
pub struct CitiesArgs {
    /// Number of top emitters to list
    #[arg(long, default_value = "10")]
    pub top: usize,

    /// List every city
    #[arg(long, conflicts_with_all = ["city", "legend"])]
    pub all: bool,

    /// Show a single city
    #[arg(long, conflicts_with = "legend")]
    pub city: Option<String>,

    /// Show the severity legend
    #[arg(long)]
    pub legend: bool,
}

#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// Report what would be copied without writing
    #[arg(long)]
    pub dry_run: bool,
}
