//! Property tests for the footprint estimator and the AQI classifier

use ecotrack_core::aqi::tier_for;
use ecotrack_core::estimator::{estimate, progress_to_target, tips, Tip, MAX_TIPS};
use ecotrack_core::models::{AqiTier, DietCategory, LifestyleInput};
use proptest::prelude::*;

fn diet() -> impl Strategy<Value = DietCategory> {
    prop_oneof![
        Just(DietCategory::Vegan),
        Just(DietCategory::Vegetarian),
        Just(DietCategory::LightMeat),
        Just(DietCategory::MediumMeat),
        Just(DietCategory::HeavyMeat),
        Just(DietCategory::Unrecognized),
    ]
}

fn lifestyle() -> impl Strategy<Value = LifestyleInput> {
    (0.0..100_000.0f64, 0.0..500.0f64, 0.0..5_000.0f64, diet(), 0.0..1_000.0f64).prop_map(
        |(car, air, electricity, diet, waste)| LifestyleInput {
            car_km_per_year: car,
            air_hours_per_year: air,
            electricity_kwh_per_month: electricity,
            diet,
            waste_kg_per_month: waste,
        },
    )
}

proptest! {
    #[test]
    fn total_is_sum_of_categories(input in lifestyle()) {
        let result = estimate(&input);
        let b = result.breakdown;
        prop_assert_eq!(result.total, b.transport + b.energy + b.diet + b.waste);
    }

    #[test]
    fn breakdown_is_non_negative(input in lifestyle()) {
        let result = estimate(&input);
        for (_, value) in result.breakdown.entries() {
            prop_assert!(value >= 0.0);
        }
        prop_assert!(result.total >= 1.5);
    }

    #[test]
    fn estimate_is_deterministic(input in lifestyle()) {
        prop_assert_eq!(estimate(&input), estimate(&input));
    }

    #[test]
    fn tips_are_bounded_and_never_empty(input in lifestyle()) {
        let result = estimate(&input);
        prop_assert!(!result.tips.is_empty());
        prop_assert!(result.tips.len() <= MAX_TIPS);
        let list = tips(&result.breakdown, input.diet);
        if list.contains(&Tip::MaintainHabits) {
            prop_assert_eq!(list.len(), 1);
        }
    }

    #[test]
    fn progress_is_clamped(total in 0.0..1e9f64) {
        let progress = progress_to_target(total);
        prop_assert!((0.0..=100.0).contains(&progress));
    }

    #[test]
    fn dominant_category_has_maximal_value(input in lifestyle()) {
        let result = estimate(&input);
        let dominant = result.breakdown.get(result.dominant);
        for (_, value) in result.breakdown.entries() {
            prop_assert!(dominant >= value);
        }
    }

    #[test]
    fn aqi_tiers_partition_the_domain(value in 0.0..1_000.0f64) {
        let tier = tier_for(value).unwrap();
        if let Some(bound) = tier.upper_bound() {
            prop_assert!(value <= bound);
        }
        let index = AqiTier::ALL.iter().position(|t| *t == tier).unwrap();
        if index > 0 {
            let lower = AqiTier::ALL[index - 1].upper_bound().unwrap();
            prop_assert!(value > lower);
        }
    }

    #[test]
    fn aqi_classification_is_monotonic(a in 0.0..600.0f64, b in 0.0..600.0f64) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(tier_for(low).unwrap() <= tier_for(high).unwrap());
    }
}
