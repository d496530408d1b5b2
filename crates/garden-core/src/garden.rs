//! Garden manager: plant registry and shared water stock.
//!
//! # Invariants
//!
//! 1. `water_stock` is never negative (stored unsigned)
//! 2. Plants keep insertion order; the collection is append-only
//! 3. The plant count is always the collection length; it is never stored
//! 4. Watering is all-or-nothing: feasibility is checked before the first
//!    unit is taken, so a failed call leaves the stock untouched
//!
//! Stock mutation and its feasibility check both happen inside a single
//! `&mut self` call, so no other mutator can run between them.

use serde_json::Value;

use crate::config::HealthThresholds;
use crate::error::{GardenError, Result};
use crate::events::{GardenEvent, RecordedEvent};
use crate::name::Name;
use crate::plant::Plant;
use crate::record;

/// Water consumed by one plant in one watering round.
pub const WATER_PER_PLANT: u64 = 1;

/// Owner of a plant collection and its water supply.
#[derive(Debug, Clone)]
pub struct GardenManager {
    name: Name,
    owner: Name,
    water_stock: u64,
    plants: Vec<Plant>,
    thresholds: HealthThresholds,
    journal: Vec<RecordedEvent>,
}

impl GardenManager {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Create a garden with an empty collection.
    ///
    /// # Errors
    ///
    /// - `GardenError` if `name` or `owner` is empty (name checked first)
    /// - `WaterError` if `water_stock` is negative
    pub fn create(
        name: &str,
        owner: &str,
        water_stock: i64,
    ) -> std::result::Result<Self, GardenError> {
        let name = Name::canonical(name)
            .ok_or_else(|| GardenError::garden("Registry Error: Garden name cannot be empty."))?;
        let owner = Name::canonical(owner)
            .ok_or_else(|| GardenError::garden("Registry Error: Owner name cannot be empty."))?;
        let water_stock = u64::try_from(water_stock).map_err(|_| {
            GardenError::water(format!(
                "Inventory Error: Water stock cannot be negative ({water_stock})."
            ))
        })?;

        tracing::info!(garden = %name, owner = %owner, water_stock, "garden created");

        Ok(Self {
            name,
            owner,
            water_stock,
            plants: Vec::new(),
            thresholds: HealthThresholds::default(),
            journal: Vec::new(),
        })
    }

    /// Create a garden from an untyped record with `name`, `owner` and
    /// `water_stock`. Both names are type-checked before any emptiness rule.
    pub fn from_record(record: &Value) -> Result<Self> {
        let name = record::string_field(record, "name")?;
        let owner = record::string_field(record, "owner")?;
        let water_stock = record::integer_field(record, "water_stock")?;

        Ok(Self::create(name, owner, water_stock)?)
    }

    /// Replace the health-diagnostic thresholds.
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfig` if either range has `min > max`.
    pub fn with_thresholds(mut self, thresholds: HealthThresholds) -> Result<Self> {
        thresholds.validate()?;
        self.thresholds = thresholds;
        Ok(self)
    }

    // ========================================================================
    // QUERY METHODS
    // ========================================================================

    #[must_use]
    pub const fn name(&self) -> &Name {
        &self.name
    }

    #[must_use]
    pub const fn owner(&self) -> &Name {
        &self.owner
    }

    #[must_use]
    pub const fn water_stock(&self) -> u64 {
        self.water_stock
    }

    /// Plants in insertion order
    #[must_use]
    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    #[must_use]
    pub fn number_plants(&self) -> usize {
        self.plants.len()
    }

    #[must_use]
    pub const fn thresholds(&self) -> &HealthThresholds {
        &self.thresholds
    }

    /// Water needed to give every plant one round.
    #[must_use]
    pub fn required_water(&self) -> u64 {
        u64::try_from(self.plants.len())
            .map_or(u64::MAX, |count| count.saturating_mul(WATER_PER_PLANT))
    }

    // ========================================================================
    // EVENT JOURNAL
    // ========================================================================

    /// Events recorded since the last drain.
    ///
    /// The journal is unbounded: every successful operation appends to it
    /// and only [`Self::drain_events`] empties it. Long-lived callers should
    /// drain after each operation they render.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.journal
    }

    /// Take all recorded events, leaving the journal empty.
    pub fn drain_events(&mut self) -> Vec<RecordedEvent> {
        std::mem::take(&mut self.journal)
    }

    pub(crate) fn record(&mut self, event: GardenEvent) {
        tracing::debug!(event_type = event.event_type(), plant = event.plant(), "{event}");
        self.journal.push(RecordedEvent::now(event));
    }

    // ========================================================================
    // OPERATIONS
    // ========================================================================

    /// Append an already validated plant to the collection.
    pub fn add_plant(&mut self, plant: Plant) {
        let event = GardenEvent::PlantAdded {
            plant: plant.name().to_string(),
            garden: self.name.to_string(),
        };
        tracing::info!(garden = %self.name, plant = %plant.name(), "plant added");
        self.plants.push(plant);
        self.record(event);
    }

    /// Give every plant one unit of water, in collection order.
    ///
    /// # Errors
    ///
    /// `WaterError` if the stock cannot cover every plant. Nothing is
    /// consumed in that case.
    pub fn water_plants(&mut self) -> std::result::Result<(), GardenError> {
        let required = self.required_water();
        if self.water_stock < required {
            tracing::warn!(
                garden = %self.name,
                water_stock = self.water_stock,
                required,
                "watering refused"
            );
            return Err(GardenError::water(format!(
                "Resource Scarcity: Tank level ({}) is below required amount ({required}).",
                self.water_stock
            )));
        }

        let names: Vec<String> = self.plants.iter().map(|p| p.name().to_string()).collect();
        for plant in names {
            self.water_stock -= WATER_PER_PLANT;
            let remaining_stock = self.water_stock;
            self.record(GardenEvent::PlantWatered {
                plant,
                remaining_stock,
            });
        }

        tracing::info!(
            garden = %self.name,
            watered = self.plants.len(),
            water_stock = self.water_stock,
            "watering complete"
        );
        Ok(())
    }

    /// Check that the stock covers one more watering round.
    ///
    /// # Errors
    ///
    /// `WaterError` if `water_stock` is below the plant count.
    pub fn check_water_tank(&self) -> std::result::Result<(), GardenError> {
        if self.water_stock < self.required_water() {
            tracing::warn!(garden = %self.name, water_stock = self.water_stock, "water reserves low");
            return Err(GardenError::water(format!(
                "Critical Level: Low water reserves ({} units remaining).",
                self.water_stock
            )));
        }
        Ok(())
    }
}
