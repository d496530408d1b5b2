//! Property-based tests for plant construction and error hierarchy.
//!
//! Invariants tested:
//! - Age/height zero-consistency
//! - Negative fields fail with their own error kind
//! - Valid inputs always build, with a canonical name
//! - Every domain error is caught by the root kind

#![allow(clippy::expect_used, clippy::unwrap_used)]
#![forbid(unsafe_code)]

use garden_core::{ErrorKind, GardenError, Plant};
use proptest::prelude::*;

fn plant_config() -> ProptestConfig {
    ProptestConfig {
        cases: 128,
        max_shrink_iters: 256,
        ..ProptestConfig::default()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// STRATEGIES
// ═══════════════════════════════════════════════════════════════════════════

/// Non-empty ASCII letters, so canonicalization is easy to predict
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,24}"
}

fn positive() -> impl Strategy<Value = i64> {
    1..=100_000_i64
}

fn non_negative() -> impl Strategy<Value = i64> {
    0..=100_000_i64
}

fn negative() -> impl Strategy<Value = i64> {
    i64::MIN..=-1_i64
}

fn kind_strategy() -> impl Strategy<Value = ErrorKind> {
    prop_oneof![
        Just(ErrorKind::Garden),
        Just(ErrorKind::Plant),
        Just(ErrorKind::Water),
        Just(ErrorKind::SunLight),
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
// PROPERTIES
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(plant_config())]

    /// Exactly one of age/height being zero is a biological mismatch.
    #[test]
    fn prop_exactly_one_zero_is_plant_error(
        name in name_strategy(),
        other in positive(),
        age_is_zero in any::<bool>(),
        water in non_negative(),
        sun in non_negative(),
    ) {
        let (height, age) = if age_is_zero { (other, 0) } else { (0, other) };
        let err = Plant::new(&name, height, age, water, sun).expect_err("mismatch");
        prop_assert_eq!(err.kind(), ErrorKind::Plant);
        prop_assert!(err.message().starts_with("Biological Mismatch"));
    }

    /// Negative age or height is a PlantError.
    #[test]
    fn prop_negative_age_or_height_is_plant_error(
        name in name_strategy(),
        bad in negative(),
        good in positive(),
        negative_age in any::<bool>(),
    ) {
        let (height, age) = if negative_age { (good, bad) } else { (bad, good) };
        let err = Plant::new(&name, height, age, 5, 5).expect_err("negative");
        prop_assert_eq!(err.kind(), ErrorKind::Plant);
    }

    /// Negative water level is a WaterError.
    #[test]
    fn prop_negative_water_is_water_error(
        name in name_strategy(),
        water in negative(),
        sun in non_negative(),
    ) {
        let err = Plant::new(&name, 10, 10, water, sun).expect_err("negative water");
        prop_assert_eq!(err.kind(), ErrorKind::Water);
    }

    /// Negative sunlight is a SunLightError.
    #[test]
    fn prop_negative_sunlight_is_sunlight_error(
        name in name_strategy(),
        water in non_negative(),
        sun in negative(),
    ) {
        let err = Plant::new(&name, 10, 10, water, sun).expect_err("negative sunlight");
        prop_assert_eq!(err.kind(), ErrorKind::SunLight);
    }

    /// Consistent non-negative inputs always build and keep their values.
    #[test]
    fn prop_valid_inputs_build(
        name in name_strategy(),
        size in non_negative(),
        age in positive(),
        water in non_negative(),
        sun in non_negative(),
    ) {
        let (height, age) = if size == 0 { (0, 0) } else { (size, age) };
        let plant = Plant::new(&name, height, age, water, sun).expect("valid plant");

        let mut expected = name[..1].to_uppercase();
        expected.push_str(&name[1..].to_lowercase());
        prop_assert_eq!(plant.name().as_str(), expected.as_str());
        prop_assert_eq!(plant.height(), height.unsigned_abs());
        prop_assert_eq!(plant.age(), age.unsigned_abs());
        prop_assert_eq!(plant.water_level(), water.unsigned_abs());
        prop_assert_eq!(plant.sunlight_hours(), sun.unsigned_abs());
    }

    /// A handler for the root kind catches every domain error, wrapped or not.
    #[test]
    fn prop_root_kind_catches_everything(
        kind in kind_strategy(),
        cause_kind in kind_strategy(),
        message in "[a-z ]{0,32}",
        wrapped in any::<bool>(),
    ) {
        let err = GardenError::new(kind, message.clone());
        let err = if wrapped {
            err.caused_by(GardenError::new(cause_kind, "cause"))
        } else {
            err
        };
        prop_assert!(err.is(ErrorKind::Garden));
        prop_assert!(err.is(kind));
        prop_assert!(err.to_string().starts_with(&message));
    }

    /// A specialization handler only catches its own kind.
    #[test]
    fn prop_specialization_handler_is_narrow(kind in kind_strategy(), target in kind_strategy()) {
        prop_assume!(target != ErrorKind::Garden);
        let err = GardenError::new(kind, "x");
        prop_assert_eq!(err.is(target), kind == target);
    }
}
