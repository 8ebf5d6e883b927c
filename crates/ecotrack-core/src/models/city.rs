use serde::Serialize;
use std::fmt;

use super::air_quality::Coordinate;

/// Named emission source category of a city
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmissionSource {
    Transport,
    Industry,
    Power,
    Residential,
    Port,
}

impl EmissionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmissionSource::Transport => "transport",
            EmissionSource::Industry => "industry",
            EmissionSource::Power => "power",
            EmissionSource::Residential => "residential",
            EmissionSource::Port => "port",
        }
    }
}

impl fmt::Display for EmissionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Annual emissions of a single city
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityEmissions {
    pub name: &'static str,
    pub coordinate: Coordinate,

    /// Annual emissions in tonnes CO2
    pub emissions: f64,

    pub population: u64,
    pub sources: &'static [EmissionSource],
}

impl CityEmissions {
    /// Emissions per resident; a zero population counts as one
    pub fn per_capita(&self) -> f64 {
        self.emissions / self.population.max(1) as f64
    }

    pub fn severity(&self) -> SeverityBucket {
        SeverityBucket::for_emissions(self.emissions)
    }

    /// Map marker radius, monotonic in emissions and never below 6
    pub fn marker_radius(&self) -> f64 {
        marker_radius(self.emissions)
    }
}

/// Map marker radius for an emissions value
pub fn marker_radius(emissions: f64) -> f64 {
    (emissions.max(0.0).sqrt() / 200.0).max(6.0)
}

/// Emissions severity bin shared by map markers and the legend
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityBucket {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl SeverityBucket {
    pub const ALL: [SeverityBucket; 4] =
        [SeverityBucket::Low, SeverityBucket::Medium, SeverityBucket::High, SeverityBucket::VeryHigh];

    /// Bin an annual emissions value in tonnes
    pub fn for_emissions(emissions: f64) -> Self {
        if emissions < 6_000_000.0 {
            SeverityBucket::Low
        } else if emissions < 12_000_000.0 {
            SeverityBucket::Medium
        } else if emissions < 24_000_000.0 {
            SeverityBucket::High
        } else {
            SeverityBucket::VeryHigh
        }
    }

    /// Exclusive upper bound of the bin in tonnes
    pub fn upper_bound(&self) -> Option<f64> {
        match self {
            SeverityBucket::Low => Some(6_000_000.0),
            SeverityBucket::Medium => Some(12_000_000.0),
            SeverityBucket::High => Some(24_000_000.0),
            SeverityBucket::VeryHigh => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SeverityBucket::Low => "Low",
            SeverityBucket::Medium => "Medium",
            SeverityBucket::High => "High",
            SeverityBucket::VeryHigh => "Very High",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            SeverityBucket::Low => "#22c55e",
            SeverityBucket::Medium => "#facc15",
            SeverityBucket::High => "#f97316",
            SeverityBucket::VeryHigh => "#ef4444",
        }
    }
}

impl fmt::Display for SeverityBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
