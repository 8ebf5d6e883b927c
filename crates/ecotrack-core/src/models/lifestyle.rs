use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{EcotrackError, Result};

/// Diet category, each bound to a fixed annual tonnage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DietCategory {
    Vegan,
    Vegetarian,
    LightMeat,
    MediumMeat,
    HeavyMeat,
    /// Any key outside the known set; valued like a medium meat diet
    Unrecognized,
}

impl DietCategory {
    /// All recognized categories in display order
    pub const ALL: [DietCategory; 5] = [
        DietCategory::Vegan,
        DietCategory::Vegetarian,
        DietCategory::LightMeat,
        DietCategory::MediumMeat,
        DietCategory::HeavyMeat,
    ];

    /// Annual emissions in tonnes CO2e
    pub fn tonnes(&self) -> f64 {
        match self {
            DietCategory::Vegan => 1.5,
            DietCategory::Vegetarian => 2.0,
            DietCategory::LightMeat => 3.0,
            DietCategory::MediumMeat => 4.0,
            DietCategory::HeavyMeat => 5.0,
            DietCategory::Unrecognized => 4.0,
        }
    }

    /// Storage key
    pub fn key(&self) -> &'static str {
        match self {
            DietCategory::Vegan => "vegan",
            DietCategory::Vegetarian => "vegetarian",
            DietCategory::LightMeat => "light",
            DietCategory::MediumMeat => "medium",
            DietCategory::HeavyMeat => "heavy",
            DietCategory::Unrecognized => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DietCategory::Vegan => "Vegan",
            DietCategory::Vegetarian => "Vegetarian",
            DietCategory::LightMeat => "Light Meat",
            DietCategory::MediumMeat => "Medium Meat",
            DietCategory::HeavyMeat => "Heavy Meat",
            DietCategory::Unrecognized => "Unknown",
        }
    }

    /// Map a key to a category, falling back to `Unrecognized`
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "vegan" => DietCategory::Vegan,
            "vegetarian" => DietCategory::Vegetarian,
            "light" => DietCategory::LightMeat,
            "medium" => DietCategory::MediumMeat,
            "heavy" => DietCategory::HeavyMeat,
            _ => DietCategory::Unrecognized,
        }
    }
}

impl Default for DietCategory {
    fn default() -> Self {
        DietCategory::MediumMeat
    }
}

impl FromStr for DietCategory {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(DietCategory::from_key(s))
    }
}

impl From<String> for DietCategory {
    fn from(key: String) -> Self {
        DietCategory::from_key(&key)
    }
}

impl From<DietCategory> for String {
    fn from(diet: DietCategory) -> Self {
        diet.key().to_string()
    }
}

impl fmt::Display for DietCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lifestyle inputs for a footprint estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifestyleInput {
    /// Car distance per year (km)
    pub car_km_per_year: f64,

    /// Air travel per year (hours)
    pub air_hours_per_year: f64,

    /// Electricity use per month (kWh)
    pub electricity_kwh_per_month: f64,

    /// Diet category
    pub diet: DietCategory,

    /// Waste mass per month (kg)
    pub waste_kg_per_month: f64,
}

impl Default for LifestyleInput {
    fn default() -> Self {
        Self {
            car_km_per_year: 8000.0,
            air_hours_per_year: 10.0,
            electricity_kwh_per_month: 120.0,
            diet: DietCategory::MediumMeat,
            waste_kg_per_month: 25.0,
        }
    }
}

impl LifestyleInput {
    /// Check that every numeric field is finite and non-negative
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("carKmPerYear", self.car_km_per_year),
            ("airHoursPerYear", self.air_hours_per_year),
            ("electricityKwhPerMonth", self.electricity_kwh_per_month),
            ("wasteKgPerMonth", self.waste_kg_per_month),
        ];

        for (field, value) in fields {
            if !value.is_finite() {
                return Err(EcotrackError::InvalidInput {
                    field: field.to_string(),
                    reason: format!("expected a finite number, got {}", value),
                });
            }
            if value < 0.0 {
                return Err(EcotrackError::InvalidInput {
                    field: field.to_string(),
                    reason: format!("must not be negative, got {}", value),
                });
            }
        }

        Ok(())
    }
}

/// Emission category of a breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Transport,
    Energy,
    Diet,
    Waste,
}

impl Category {
    /// Fixed priority order, also used to break ties
    pub const ALL: [Category; 4] =
        [Category::Transport, Category::Energy, Category::Diet, Category::Waste];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Transport => "Transportation",
            Category::Energy => "Energy",
            Category::Diet => "Diet",
            Category::Waste => "Waste",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Four-category decomposition of annual emissions (tonnes CO2e)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EmissionsBreakdown {
    pub transport: f64,
    pub energy: f64,
    pub diet: f64,
    pub waste: f64,
}

impl EmissionsBreakdown {
    /// Sum of the four categories
    pub fn total(&self) -> f64 {
        self.transport + self.energy + self.diet + self.waste
    }

    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Transport => self.transport,
            Category::Energy => self.energy,
            Category::Diet => self.diet,
            Category::Waste => self.waste,
        }
    }

    /// Entries in priority order
    pub fn entries(&self) -> [(Category, f64); 4] {
        Category::ALL.map(|c| (c, self.get(c)))
    }

    /// Category with the strictly greatest value; ties go to the earlier category
    pub fn dominant(&self) -> Category {
        let mut best = (Category::Transport, self.transport);
        for (category, value) in self.entries().into_iter().skip(1) {
            if value > best.1 {
                best = (category, value);
            }
        }
        best.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diet_tonnage() {
        assert_eq!(DietCategory::Vegan.tonnes(), 1.5);
        assert_eq!(DietCategory::HeavyMeat.tonnes(), 5.0);
        assert_eq!(DietCategory::Unrecognized.tonnes(), 4.0);
    }

    #[test]
    fn test_diet_from_key() {
        assert_eq!(DietCategory::from_key("vegan"), DietCategory::Vegan);
        assert_eq!(DietCategory::from_key("LIGHT"), DietCategory::LightMeat);
        assert_eq!(DietCategory::from_key("carnivore"), DietCategory::Unrecognized);
        assert_eq!("heavy".parse::<DietCategory>().unwrap(), DietCategory::HeavyMeat);
    }

    #[test]
    fn test_diet_serde_uses_keys() {
        let json = serde_json::to_string(&DietCategory::LightMeat).unwrap();
        assert_eq!(json, "\"light\"");

        let diet: DietCategory = serde_json::from_str("\"pescatarian\"").unwrap();
        assert_eq!(diet, DietCategory::Unrecognized);
    }

    #[test]
    fn test_input_serde_field_names() {
        let input = LifestyleInput::default();
        let value = serde_json::to_value(input).unwrap();
        assert_eq!(value["carKmPerYear"], 8000.0);
        assert_eq!(value["diet"], "medium");
        assert_eq!(value["wasteKgPerMonth"], 25.0);
    }

    #[test]
    fn test_validate_rejects_negative_and_nan() {
        let input = LifestyleInput { car_km_per_year: -1.0, ..Default::default() };
        assert!(matches!(
            input.validate(),
            Err(EcotrackError::InvalidInput { ref field, .. }) if field == "carKmPerYear"
        ));

        let input = LifestyleInput { waste_kg_per_month: f64::NAN, ..Default::default() };
        assert!(input.validate().is_err());

        assert!(LifestyleInput::default().validate().is_ok());
    }

    #[test]
    fn test_dominant_picks_largest() {
        let breakdown = EmissionsBreakdown { transport: 2.5, energy: 1.0, diet: 4.0, waste: 0.3 };
        assert_eq!(breakdown.dominant(), Category::Diet);
    }

    #[test]
    fn test_dominant_ties_follow_priority_order() {
        let breakdown = EmissionsBreakdown { transport: 1.0, energy: 3.0, diet: 3.0, waste: 3.0 };
        assert_eq!(breakdown.dominant(), Category::Energy);

        let zero = EmissionsBreakdown::default();
        assert_eq!(zero.dominant(), Category::Transport);
    }
}
