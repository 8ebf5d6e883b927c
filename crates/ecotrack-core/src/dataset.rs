//! Reference emissions dataset for Indian cities and its aggregates

use serde::Serialize;

use crate::models::city::marker_radius;
use crate::models::{CityEmissions, Coordinate, EmissionSource, SeverityBucket};

use crate::models::EmissionSource::{Industry, Port, Power, Residential, Transport};

/// Number of cities in the top emitters ranking
pub const TOP_N: usize = 10;

const fn city(
    name: &'static str,
    latitude: f64,
    longitude: f64,
    emissions: f64,
    population: u64,
    sources: &'static [EmissionSource],
) -> CityEmissions {
    CityEmissions {
        name,
        coordinate: Coordinate { latitude, longitude },
        emissions,
        population,
        sources,
    }
}

/// Annual emissions (tonnes CO2) of 25 Indian cities, grouped by region
pub static INDIA_CITIES: [CityEmissions; 25] = [
    // North
    city("Delhi", 28.6139, 77.2090, 64_000_000.0, 16_787_941, &[Transport, Industry, Power]),
    city("Chandigarh", 30.7333, 76.7794, 3_500_000.0, 1_055_450, &[Transport, Residential]),
    city("Lucknow", 26.8467, 80.9462, 12_000_000.0, 2_815_601, &[Transport, Residential]),
    city("Jaipur", 26.9124, 75.7873, 14_000_000.0, 3_073_350, &[Transport, Industry]),
    city("Amritsar", 31.6340, 74.8723, 7_000_000.0, 1_132_383, &[Transport, Residential]),
    // South
    city("Bangalore", 12.9716, 77.5946, 26_000_000.0, 8_443_675, &[Transport, Industry, Power]),
    city("Chennai", 13.0827, 80.2707, 24_000_000.0, 7_090_000, &[Transport, Industry]),
    city("Hyderabad", 17.3850, 78.4867, 22_000_000.0, 6_809_970, &[Transport, Industry]),
    city("Kochi", 9.9312, 76.2673, 6_000_000.0, 677_381, &[Transport, Residential]),
    city("Coimbatore", 11.0168, 76.9558, 8_000_000.0, 1_600_000, &[Industry, Transport]),
    city("Visakhapatnam", 17.6868, 83.2185, 10_000_000.0, 2_035_922, &[Industry, Port, Power]),
    // West
    city("Mumbai", 19.0760, 72.8777, 36_000_000.0, 12_442_373, &[Transport, Industry, Residential]),
    city("Pune", 18.5204, 73.8567, 14_000_000.0, 3_124_458, &[Transport, Industry]),
    city("Ahmedabad", 23.0225, 72.5714, 18_000_000.0, 5_570_585, &[Industry, Transport]),
    city("Surat", 21.1702, 72.8311, 16_000_000.0, 4_462_002, &[Industry, Transport]),
    city("Nagpur", 21.1458, 79.0882, 9_000_000.0, 2_405_665, &[Transport, Power]),
    // East
    city("Kolkata", 22.5726, 88.3639, 30_000_000.0, 4_496_694, &[Transport, Industry, Power]),
    city("Patna", 25.5941, 85.1376, 9_000_000.0, 1_683_200, &[Transport, Residential]),
    city("Bhubaneswar", 20.2961, 85.8245, 7_000_000.0, 837_737, &[Transport, Industry]),
    city("Ranchi", 23.3441, 85.3096, 6_000_000.0, 1_122_000, &[Transport, Residential]),
    // Northeast
    city("Guwahati", 26.1445, 91.7362, 6_000_000.0, 963_429, &[Transport, Residential]),
    city("Shillong", 25.5788, 91.8933, 2_000_000.0, 143_229, &[Residential, Transport]),
    // Central
    city("Indore", 22.7196, 75.8577, 9_000_000.0, 1_960_631, &[Transport, Industry]),
    city("Bhopal", 23.2599, 77.4126, 8_000_000.0, 1_798_218, &[Transport, Residential]),
    city("Raipur", 21.2514, 81.6296, 7_000_000.0, 1_010_087, &[Industry, Power]),
];

/// A city with its derived display values
#[derive(Debug, Clone, Serialize)]
pub struct CityView<'a> {
    #[serde(flatten)]
    pub city: &'a CityEmissions,
    pub per_capita: f64,
    pub severity: SeverityBucket,
    pub marker_radius: f64,
}

impl<'a> CityView<'a> {
    pub fn new(city: &'a CityEmissions) -> Self {
        Self {
            city,
            per_capita: city.per_capita(),
            severity: city.severity(),
            marker_radius: city.marker_radius(),
        }
    }
}

/// Dataset-wide aggregates
#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary<'a> {
    pub city_count: usize,
    pub total_emissions: f64,
    pub total_population: u64,
    pub average_per_capita: f64,
    pub top: Vec<CityView<'a>>,
}

/// One legend row, consistent with [`SeverityBucket::for_emissions`]
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LegendEntry {
    pub bucket: SeverityBucket,
    pub label: &'static str,
    pub color: &'static str,
    pub lower_bound: f64,
    pub upper_bound: Option<f64>,
    /// Marker radius at the bin's lower bound
    pub min_marker_radius: f64,
}

/// Aggregations over a fixed set of city records
#[derive(Debug, Clone, Copy)]
pub struct EmissionsDataset<'a> {
    cities: &'a [CityEmissions],
}

impl EmissionsDataset<'static> {
    /// The bundled Indian city dataset
    pub fn india() -> Self {
        Self::new(&INDIA_CITIES)
    }
}

impl<'a> EmissionsDataset<'a> {
    pub fn new(cities: &'a [CityEmissions]) -> Self {
        Self { cities }
    }

    pub fn cities(&self) -> &'a [CityEmissions] {
        self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Every city with its derived values, in dataset order
    pub fn views(&self) -> Vec<CityView<'a>> {
        self.cities.iter().map(CityView::new).collect()
    }

    pub fn find(&self, name: &str) -> Option<&'a CityEmissions> {
        self.cities.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    pub fn total_emissions(&self) -> f64 {
        self.cities.iter().map(|c| c.emissions).sum()
    }

    pub fn total_population(&self) -> u64 {
        self.cities.iter().map(|c| c.population).sum()
    }

    /// Total emissions over total population; an empty population counts as one
    pub fn average_per_capita(&self) -> f64 {
        self.total_emissions() / self.total_population().max(1) as f64
    }

    /// The `n` largest emitters, descending. Equal emissions keep dataset order.
    pub fn top_emitters(&self, n: usize) -> Vec<CityView<'a>> {
        let mut ranked: Vec<&'a CityEmissions> = self.cities.iter().collect();
        // sort_by is stable
        ranked.sort_by(|a, b| b.emissions.total_cmp(&a.emissions));
        ranked.into_iter().take(n).map(CityView::new).collect()
    }

    pub fn summary(&self) -> DatasetSummary<'a> {
        DatasetSummary {
            city_count: self.len(),
            total_emissions: self.total_emissions(),
            total_population: self.total_population(),
            average_per_capita: self.average_per_capita(),
            top: self.top_emitters(TOP_N),
        }
    }
}

/// Legend rows for all severity buckets in ascending order
pub fn legend() -> Vec<LegendEntry> {
    let mut lower = 0.0;
    SeverityBucket::ALL
        .iter()
        .map(|bucket| {
            let entry = LegendEntry {
                bucket: *bucket,
                label: bucket.label(),
                color: bucket.color(),
                lower_bound: lower,
                upper_bound: bucket.upper_bound(),
                min_marker_radius: marker_radius(lower),
            };
            lower = bucket.upper_bound().unwrap_or(lower);
            entry
        })
        .collect()
}
