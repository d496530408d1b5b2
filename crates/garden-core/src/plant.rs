//! Plant entity and its validating constructor.
//!
//! # Invariants
//!
//! 1. The name is non-empty and canonical (see [`Name`])
//! 2. `age == 0` if and only if `height == 0`
//! 3. All numeric fields are non-negative (stored unsigned)
//!
//! Construction is all-or-nothing: a `Plant` value always satisfies every
//! invariant, and there are no setters.

use serde::Serialize;
use serde_json::Value;

use crate::error::{GardenError, Result};
use crate::name::Name;
use crate::record;

/// A validated garden plant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plant {
    name: Name,
    height: u64,
    age: u64,
    water_level: u64,
    sunlight_hours: u64,
}

impl Plant {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Validate the inputs and build a plant.
    ///
    /// Checks run in a fixed order and stop at the first violation:
    /// empty name, age/height consistency, negative age, negative height
    /// (all `PlantError`), negative water level (`WaterError`), negative
    /// sunlight hours (`SunLightError`).
    pub fn new(
        name: &str,
        height: i64,
        age: i64,
        water_level: i64,
        sunlight_hours: i64,
    ) -> std::result::Result<Self, GardenError> {
        let result = Self::validate(name, height, age, water_level, sunlight_hours);
        if let Err(err) = &result {
            tracing::debug!(kind = %err.kind(), "plant rejected: {err}");
        }
        result
    }

    fn validate(
        name: &str,
        height: i64,
        age: i64,
        water_level: i64,
        sunlight_hours: i64,
    ) -> std::result::Result<Self, GardenError> {
        let name = Name::canonical(name).ok_or_else(|| {
            GardenError::plant("Identification Error: Plant name cannot be empty.")
        })?;

        if (age == 0) != (height == 0) {
            return Err(GardenError::plant(format!(
                "Biological Mismatch: Inconsistent age ({age}) and height ({height}) relationship."
            )));
        }

        let age = non_negative(age, || {
            GardenError::plant(format!("Value Error: Age cannot be negative ({age})."))
        })?;
        let height = non_negative(height, || {
            GardenError::plant(format!("Value Error: Height cannot be negative ({height})."))
        })?;
        let water_level = non_negative(water_level, || {
            GardenError::water(format!(
                "Hydration Error: Water level cannot be negative ({water_level})."
            ))
        })?;
        let sunlight_hours = non_negative(sunlight_hours, || {
            GardenError::sunlight(format!(
                "Photosynthesis Error: Sunlight hours cannot be negative ({sunlight_hours})."
            ))
        })?;

        Ok(Self {
            name,
            height,
            age,
            water_level,
            sunlight_hours,
        })
    }

    /// Build a plant from an untyped record with the fields `name`,
    /// `height`, `age`, `water_level` and `sunlight_hours`.
    ///
    /// Field types are checked first (`name` before the numbers), then the
    /// same rules as [`Plant::new`] apply.
    pub fn from_record(record: &Value) -> Result<Self> {
        let name = record::string_field(record, "name")?;
        let height = record::integer_field(record, "height")?;
        let age = record::integer_field(record, "age")?;
        let water_level = record::integer_field(record, "water_level")?;
        let sunlight_hours = record::integer_field(record, "sunlight_hours")?;

        Ok(Self::new(name, height, age, water_level, sunlight_hours)?)
    }

    // ========================================================================
    // QUERY METHODS
    // ========================================================================

    #[must_use]
    pub const fn name(&self) -> &Name {
        &self.name
    }

    #[must_use]
    pub const fn height(&self) -> u64 {
        self.height
    }

    #[must_use]
    pub const fn age(&self) -> u64 {
        self.age
    }

    #[must_use]
    pub const fn water_level(&self) -> u64 {
        self.water_level
    }

    #[must_use]
    pub const fn sunlight_hours(&self) -> u64 {
        self.sunlight_hours
    }
}

fn non_negative(
    value: i64,
    violation: impl FnOnce() -> GardenError,
) -> std::result::Result<u64, GardenError> {
    u64::try_from(value).map_err(|_| violation())
}
