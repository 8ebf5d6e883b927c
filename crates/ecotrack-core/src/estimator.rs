//! Carbon footprint estimation
//!
//! Converts a [`LifestyleInput`] into a four-category breakdown using fixed
//! linear emission factors, compares the total against reference values and
//! derives ranked reduction tips. Everything here is deterministic.

use serde::Serialize;
use std::fmt;

use crate::error::{EcotrackError, Result};
use crate::models::{Category, DietCategory, EmissionsBreakdown, LifestyleInput};

/// Global average footprint in tonnes CO2e per year
pub const GLOBAL_AVERAGE_TONNES: f64 = 4.7;

/// Per-person target footprint in tonnes CO2e per year
pub const TARGET_TONNES: f64 = 2.0;

/// Maximum number of tips returned
pub const MAX_TIPS: usize = 3;

/// Linear emission factors (tonnes CO2e)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmissionFactors {
    pub car_tonnes_per_km: f64,
    pub air_tonnes_per_hour: f64,
    pub electricity_tonnes_per_kwh: f64,
    pub waste_tonnes_per_kg: f64,
}

impl EmissionFactors {
    pub const STANDARD: EmissionFactors = EmissionFactors {
        car_tonnes_per_km: 0.0002,
        air_tonnes_per_hour: 0.09,
        electricity_tonnes_per_kwh: 0.0007,
        waste_tonnes_per_kg: 0.0012,
    };

    /// Compute the breakdown of an input under these factors
    pub fn breakdown(&self, input: &LifestyleInput) -> EmissionsBreakdown {
        EmissionsBreakdown {
            transport: input.car_km_per_year * self.car_tonnes_per_km
                + input.air_hours_per_year * self.air_tonnes_per_hour,
            energy: input.electricity_kwh_per_month * 12.0 * self.electricity_tonnes_per_kwh,
            diet: input.diet.tonnes(),
            waste: input.waste_kg_per_month * 12.0 * self.waste_tonnes_per_kg,
        }
    }
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Reduction tip, listed in trigger priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tip {
    Transport,
    Energy,
    Diet,
    Waste,
    MaintainHabits,
}

impl Tip {
    pub fn message(&self) -> &'static str {
        match self {
            Tip::Transport => {
                "Reduce car trips, carpool, or switch to public transport. Consider EVs for lower g/km."
            }
            Tip::Energy => {
                "Improve home efficiency: LED lighting, efficient ACs, and solar where possible."
            }
            Tip::Diet => "Shift meals towards plant-forward options to cut diet emissions.",
            Tip::Waste => "Increase recycling/composting and cut single-use packaging.",
            Tip::MaintainHabits => {
                "Great job! Maintain your habits and share what works with friends."
            }
        }
    }
}

impl fmt::Display for Tip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Tips triggered by a breakdown, at most [`MAX_TIPS`], never empty
pub fn tips(breakdown: &EmissionsBreakdown, diet: DietCategory) -> Vec<Tip> {
    let triggered = [
        (breakdown.transport > 1.5, Tip::Transport),
        (breakdown.energy > 1.2, Tip::Energy),
        (diet != DietCategory::Vegan, Tip::Diet),
        (breakdown.waste > 0.5, Tip::Waste),
    ];

    let mut list: Vec<Tip> =
        triggered.into_iter().filter(|(hit, _)| *hit).map(|(_, tip)| tip).take(MAX_TIPS).collect();

    if list.is_empty() {
        list.push(Tip::MaintainHabits);
    }
    list
}

/// Percentage of the way to [`TARGET_TONNES`], clamped to `[0, 100]`.
///
/// A total of zero (or anything non-positive) counts as 100%.
pub fn progress_to_target(total: f64) -> f64 {
    if total.is_nan() || total <= 0.0 {
        return 100.0;
    }
    ((TARGET_TONNES / total) * 100.0).clamp(0.0, 100.0)
}

/// Signed comparison of a total against the global average
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AverageComparison {
    pub global_average: f64,

    /// `total - global_average`; positive means above average
    pub delta: f64,
}

impl AverageComparison {
    pub fn for_total(total: f64) -> Self {
        Self {
            global_average: GLOBAL_AVERAGE_TONNES,
            delta: total - GLOBAL_AVERAGE_TONNES,
        }
    }

    pub fn is_above_average(&self) -> bool {
        self.delta > 0.0
    }
}

impl fmt::Display for AverageComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+.2} t", self.delta)
    }
}

/// Full result of estimating an input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    pub breakdown: EmissionsBreakdown,
    pub total: f64,
    pub comparison: AverageComparison,
    pub progress_to_target: f64,
    pub dominant: Category,
    pub tips: Vec<Tip>,
}

/// Estimate an input with the standard factors.
///
/// Inputs are not validated here; see [`try_estimate`].
pub fn estimate(input: &LifestyleInput) -> Estimate {
    estimate_with(&EmissionFactors::STANDARD, input)
}

pub fn estimate_with(factors: &EmissionFactors, input: &LifestyleInput) -> Estimate {
    let breakdown = factors.breakdown(input);
    let total = breakdown.total();

    Estimate {
        breakdown,
        total,
        comparison: AverageComparison::for_total(total),
        progress_to_target: progress_to_target(total),
        dominant: breakdown.dominant(),
        tips: tips(&breakdown, input.diet),
    }
}

/// Validate then estimate.
///
/// Inputs large enough to overflow a category are rejected. Every factor is
/// below one, so a finite breakdown also has a finite total.
pub fn try_estimate(input: &LifestyleInput) -> Result<Estimate> {
    input.validate()?;
    let result = estimate(input);

    for (category, value) in result.breakdown.entries() {
        if !value.is_finite() {
            return Err(EcotrackError::InvalidInput {
                field: category_field(category).to_string(),
                reason: format!("too large, {} emissions overflow", category.label()),
            });
        }
    }
    Ok(result)
}

/// Input field driving a category, as named in serialized inputs
fn category_field(category: Category) -> &'static str {
    match category {
        Category::Transport => "carKmPerYear/airHoursPerYear",
        Category::Energy => "electricityKwhPerMonth",
        Category::Diet => "diet",
        Category::Waste => "wasteKgPerMonth",
    }
}

/// Holds the current input and keeps its estimate in step with every change
#[derive(Debug, Clone)]
pub struct Calculator {
    input: LifestyleInput,
    estimate: Estimate,
}

impl Calculator {
    pub fn new(input: LifestyleInput) -> Result<Self> {
        let estimate = try_estimate(&input)?;
        Ok(Self { input, estimate })
    }

    pub fn input(&self) -> &LifestyleInput {
        &self.input
    }

    pub fn estimate(&self) -> &Estimate {
        &self.estimate
    }

    /// Apply an edit and recompute. A rejected edit leaves the state untouched.
    pub fn update<F>(&mut self, edit: F) -> Result<&Estimate>
    where
        F: FnOnce(&mut LifestyleInput),
    {
        let mut next = self.input;
        edit(&mut next);
        let estimate = try_estimate(&next)?;

        self.input = next;
        self.estimate = estimate;
        Ok(&self.estimate)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        let input = LifestyleInput::default();
        Self { input, estimate: estimate(&input) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_vegan_floor() {
        let input = LifestyleInput {
            car_km_per_year: 0.0,
            air_hours_per_year: 0.0,
            electricity_kwh_per_month: 0.0,
            diet: DietCategory::Vegan,
            waste_kg_per_month: 0.0,
        };
        let result = estimate(&input);
        assert_eq!(result.total, 1.5);
        assert_eq!(result.dominant, Category::Diet);
        assert_eq!(result.tips, vec![Tip::MaintainHabits]);
    }

    #[test]
    fn test_reference_input() {
        let result = estimate(&LifestyleInput::default());
        let b = result.breakdown;

        assert!(approx(b.transport, 2.5));
        assert!(approx(b.energy, 1.008));
        assert_eq!(b.diet, 4.0);
        assert!(approx(b.waste, 0.36));
        assert!(approx(result.total, 7.868));
        assert_eq!(result.total, b.transport + b.energy + b.diet + b.waste);
        assert_eq!(result.dominant, Category::Diet);
    }

    #[test]
    fn test_reference_input_tips() {
        let result = estimate(&LifestyleInput::default());
        // transport 2.5 > 1.5, energy 1.008 <= 1.2, medium diet, waste 0.36 <= 0.5
        assert_eq!(result.tips, vec![Tip::Transport, Tip::Diet]);
    }

    #[test]
    fn test_tips_capped_at_three_in_priority_order() {
        let breakdown = EmissionsBreakdown { transport: 3.0, energy: 2.0, diet: 5.0, waste: 1.0 };
        let list = tips(&breakdown, DietCategory::HeavyMeat);
        assert_eq!(list, vec![Tip::Transport, Tip::Energy, Tip::Diet]);
    }

    #[test]
    fn test_tips_thresholds_are_strict() {
        let breakdown = EmissionsBreakdown { transport: 1.5, energy: 1.2, diet: 1.5, waste: 0.5 };
        assert_eq!(tips(&breakdown, DietCategory::Vegan), vec![Tip::MaintainHabits]);
    }

    #[test]
    fn test_unrecognized_diet_triggers_diet_tip() {
        let breakdown = EmissionsBreakdown { transport: 0.0, energy: 0.0, diet: 4.0, waste: 0.0 };
        assert_eq!(tips(&breakdown, DietCategory::Unrecognized), vec![Tip::Diet]);
    }

    #[test]
    fn test_progress_to_target_clamped() {
        assert_eq!(progress_to_target(0.0), 100.0);
        assert_eq!(progress_to_target(1e-12), 100.0);
        assert_eq!(progress_to_target(2.0), 100.0);
        assert_eq!(progress_to_target(4.0), 50.0);
        assert!(progress_to_target(1e12) < 1e-6);
        assert!(progress_to_target(1e12) >= 0.0);
    }

    #[test]
    fn test_average_comparison_sign() {
        let above = AverageComparison::for_total(7.868);
        assert!(above.is_above_average());
        assert_eq!(above.to_string(), "+3.17 t");

        let below = AverageComparison::for_total(1.5);
        assert!(!below.is_above_average());
        assert_eq!(below.to_string(), "-3.20 t");
    }

    #[test]
    fn test_average_comparison_at_average_is_not_negative() {
        assert_eq!(AverageComparison::for_total(GLOBAL_AVERAGE_TONNES).to_string(), "+0.00 t");
    }

    #[test]
    fn test_try_estimate_rejects_overflowing_input() {
        let input = LifestyleInput { electricity_kwh_per_month: 1e308, ..Default::default() };
        assert!(input.validate().is_ok());
        assert!(matches!(
            try_estimate(&input),
            Err(EcotrackError::InvalidInput { ref field, .. }) if field == "electricityKwhPerMonth"
        ));

        let input = LifestyleInput { waste_kg_per_month: 1e308, ..Default::default() };
        assert!(matches!(
            try_estimate(&input),
            Err(EcotrackError::InvalidInput { ref field, .. }) if field == "wasteKgPerMonth"
        ));
    }

    #[test]
    fn test_try_estimate_accepts_largest_transport() {
        let input = LifestyleInput {
            car_km_per_year: f64::MAX,
            air_hours_per_year: f64::MAX,
            ..Default::default()
        };
        assert!(try_estimate(&input).unwrap().total.is_finite());
    }

    #[test]
    fn test_calculator_rejects_overflowing_update() {
        let mut calculator = Calculator::default();
        assert!(calculator.update(|input| input.waste_kg_per_month = 1e308).is_err());
        assert!(calculator.estimate().total.is_finite());
    }

    #[test]
    fn test_try_estimate_rejects_negative_input() {
        let input = LifestyleInput { air_hours_per_year: -3.0, ..Default::default() };
        assert!(try_estimate(&input).is_err());
    }

    #[test]
    fn test_calculator_recomputes_on_update() {
        let mut calculator = Calculator::default();
        let before = calculator.estimate().total;

        let after = calculator
            .update(|input| input.diet = DietCategory::Vegan)
            .unwrap()
            .total;

        assert!(approx(before - after, 2.5));
        assert_eq!(calculator.input().diet, DietCategory::Vegan);
    }

    #[test]
    fn test_calculator_rejects_invalid_update() {
        let mut calculator = Calculator::default();
        let result = calculator.update(|input| input.car_km_per_year = -10.0);
        assert!(result.is_err());
        assert_eq!(calculator.input().car_km_per_year, 8000.0);
    }
}
