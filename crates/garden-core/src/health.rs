//! Health diagnostics
//!
//! Re-evaluates each managed plant's water level and sunlight hours against
//! [`HealthThresholds`]. A finding is a `WaterError` or `SunLightError`; at
//! the garden level it is wrapped in a `PlantError` naming the plant, with
//! the finding kept as its cause.
//!
//! The diagnostic is fail-fast. Plants are checked in insertion order and
//! the first failing plant ends the run; plants after it are not evaluated.

use crate::config::HealthThresholds;
use crate::error::GardenError;
use crate::events::GardenEvent;
use crate::garden::GardenManager;
use crate::plant::Plant;

/// Check one plant against the thresholds.
///
/// Order: water too high, water too low, sunlight too high, sunlight too low.
///
/// # Errors
///
/// `WaterError` or `SunLightError` describing the first range violated.
pub fn check_plant(plant: &Plant, thresholds: &HealthThresholds) -> Result<(), GardenError> {
    let water = plant.water_level();
    let sun = plant.sunlight_hours();
    let HealthThresholds { water: w, sunlight: s } = thresholds;

    if !w.contains(water) {
        return Err(GardenError::water(if water > w.max {
            format!(
                "Oversaturation: Water level {water} exceeds safety limit (max {}).",
                w.max
            )
        } else {
            format!(
                "Dehydration: Water level {water} is below survival limit (min {}).",
                w.min
            )
        }));
    }
    if !s.contains(sun) {
        return Err(GardenError::sunlight(if sun > s.max {
            format!("Overexposure: {sun}h sunlight exceeds limit (max {}h).", s.max)
        } else {
            format!(
                "Light Deficiency: {sun}h is below metabolic limit (min {}h).",
                s.min
            )
        }));
    }
    Ok(())
}

impl GardenManager {
    /// Run the health diagnostic over every plant, in order.
    ///
    /// Each healthy plant records a [`GardenEvent::PlantHealthy`].
    ///
    /// # Errors
    ///
    /// `PlantError` for the first unhealthy plant, message
    /// `Diagnostic Failure for <name>`, caused by the underlying finding.
    pub fn check_plant_health(&mut self) -> Result<(), GardenError> {
        let thresholds = *self.thresholds();
        let mut healthy = Vec::with_capacity(self.number_plants());
        let mut failure = None;

        for plant in self.plants() {
            match check_plant(plant, &thresholds) {
                Ok(()) => healthy.push(GardenEvent::PlantHealthy {
                    plant: plant.name().to_string(),
                    water_level: plant.water_level(),
                    sunlight_hours: plant.sunlight_hours(),
                }),
                Err(finding) => {
                    tracing::warn!(plant = %plant.name(), kind = %finding.kind(), "health check failed");
                    failure = Some(
                        GardenError::plant(format!("Diagnostic Failure for {}", plant.name()))
                            .caused_by(finding),
                    );
                    break;
                }
            }
        }

        self.record_all(healthy);
        match failure {
            Some(err) => Err(err),
            None => {
                tracing::info!(garden = %self.name(), "all plants healthy");
                Ok(())
            }
        }
    }

    fn record_all(&mut self, events: Vec<GardenEvent>) {
        for event in events {
            self.record(event);
        }
    }
}
