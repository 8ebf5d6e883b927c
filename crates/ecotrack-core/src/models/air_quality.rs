use serde::{Deserialize, Serialize};
use std::fmt;

/// Geographic coordinate in WGS 84 degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Whether both components are finite and within WGS 84 bounds
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lat {:.3}, Lon {:.3}", self.latitude, self.longitude)
    }
}

/// Pollutants reported alongside the composite index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pollutant {
    Pm2_5,
    Pm10,
    Ozone,
    NitrogenDioxide,
    CarbonMonoxide,
    SulphurDioxide,
}

impl Pollutant {
    pub const ALL: [Pollutant; 6] = [
        Pollutant::Pm2_5,
        Pollutant::Pm10,
        Pollutant::Ozone,
        Pollutant::NitrogenDioxide,
        Pollutant::CarbonMonoxide,
        Pollutant::SulphurDioxide,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Pollutant::Pm2_5 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::Ozone => "O₃",
            Pollutant::NitrogenDioxide => "NO₂",
            Pollutant::CarbonMonoxide => "CO",
            Pollutant::SulphurDioxide => "SO₂",
        }
    }

    pub fn unit(&self) -> &'static str {
        "µg/m³"
    }
}

/// Latest sample of air quality at a coordinate.
///
/// Any field missing from the upstream series is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQualityReading {
    pub coordinate: Coordinate,

    /// Sample time as reported upstream (local ISO 8601, no offset)
    pub time: Option<String>,

    /// Composite US AQI
    pub aqi: Option<f64>,

    pub pm2_5: Option<f64>,
    pub pm10: Option<f64>,
    pub ozone: Option<f64>,
    pub nitrogen_dioxide: Option<f64>,
    pub carbon_monoxide: Option<f64>,
    pub sulphur_dioxide: Option<f64>,
}

impl AirQualityReading {
    /// A reading with every value absent
    pub fn empty(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            time: None,
            aqi: None,
            pm2_5: None,
            pm10: None,
            ozone: None,
            nitrogen_dioxide: None,
            carbon_monoxide: None,
            sulphur_dioxide: None,
        }
    }

    pub fn pollutant(&self, pollutant: Pollutant) -> Option<f64> {
        match pollutant {
            Pollutant::Pm2_5 => self.pm2_5,
            Pollutant::Pm10 => self.pm10,
            Pollutant::Ozone => self.ozone,
            Pollutant::NitrogenDioxide => self.nitrogen_dioxide,
            Pollutant::CarbonMonoxide => self.carbon_monoxide,
            Pollutant::SulphurDioxide => self.sulphur_dioxide,
        }
    }

    /// Pollutant values in display order
    pub fn pollutants(&self) -> Vec<(Pollutant, Option<f64>)> {
        Pollutant::ALL.iter().map(|p| (*p, self.pollutant(*p))).collect()
    }
}

/// Ordered AQI severity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AqiTier {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiTier {
    pub const ALL: [AqiTier; 6] = [
        AqiTier::Good,
        AqiTier::Moderate,
        AqiTier::UnhealthyForSensitiveGroups,
        AqiTier::Unhealthy,
        AqiTier::VeryUnhealthy,
        AqiTier::Hazardous,
    ];

    /// Inclusive upper bound of the tier, `None` for the open-ended top tier
    pub fn upper_bound(&self) -> Option<f64> {
        match self {
            AqiTier::Good => Some(50.0),
            AqiTier::Moderate => Some(100.0),
            AqiTier::UnhealthyForSensitiveGroups => Some(150.0),
            AqiTier::Unhealthy => Some(200.0),
            AqiTier::VeryUnhealthy => Some(300.0),
            AqiTier::Hazardous => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AqiTier::Good => "Good",
            AqiTier::Moderate => "Moderate",
            AqiTier::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiTier::Unhealthy => "Unhealthy",
            AqiTier::VeryUnhealthy => "Very Unhealthy",
            AqiTier::Hazardous => "Hazardous",
        }
    }

    pub fn guidance(&self) -> &'static str {
        match self {
            AqiTier::Good => "Air quality is satisfactory and poses little or no risk.",
            AqiTier::Moderate => {
                "Acceptable; some pollutants may pose a moderate health concern for a very small number of people."
            }
            AqiTier::UnhealthyForSensitiveGroups => {
                "Members of sensitive groups may experience health effects."
            }
            AqiTier::Unhealthy => "Everyone may begin to experience health effects.",
            AqiTier::VeryUnhealthy => "Health warnings of emergency conditions.",
            AqiTier::Hazardous => "Serious health effects; avoid outdoor activity.",
        }
    }

    /// Display colour as a hex string
    pub fn color(&self) -> &'static str {
        match self {
            AqiTier::Good => "#22c55e",
            AqiTier::Moderate => "#eab308",
            AqiTier::UnhealthyForSensitiveGroups => "#f97316",
            AqiTier::Unhealthy => "#ef4444",
            AqiTier::VeryUnhealthy => "#9333ea",
            AqiTier::Hazardous => "#be123c",
        }
    }
}

impl fmt::Display for AqiTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classification of a single AQI value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AqiClassification {
    pub value: f64,
    pub tier: AqiTier,
    pub label: &'static str,
    pub guidance: &'static str,
    pub color: &'static str,
}

impl AqiClassification {
    pub fn new(value: f64, tier: AqiTier) -> Self {
        Self {
            value,
            tier,
            label: tier.label(),
            guidance: tier.guidance(),
            color: tier.color(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_validity() {
        assert!(Coordinate::new(28.6139, 77.2090).is_valid());
        assert!(!Coordinate::new(91.0, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, f64::NAN).is_valid());
    }

    #[test]
    fn test_coordinate_display() {
        assert_eq!(Coordinate::new(12.97161, 77.59463).to_string(), "Lat 12.972, Lon 77.595");
    }

    #[test]
    fn test_tiers_are_ordered() {
        let mut sorted = AqiTier::ALL;
        sorted.sort();
        assert_eq!(sorted, AqiTier::ALL);
        assert!(AqiTier::Good < AqiTier::Hazardous);
    }

    #[test]
    fn test_empty_reading_has_no_values() {
        let reading = AirQualityReading::empty(Coordinate::new(0.0, 0.0));
        assert!(reading.aqi.is_none());
        assert!(reading.pollutants().iter().all(|(_, v)| v.is_none()));
        assert_eq!(reading.pollutants().len(), 6);
    }
}
