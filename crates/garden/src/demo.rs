//! The scripted garden walk-through.
//!
//! Every step catches its own failure and the script carries on, so a
//! single run shows each handler firing. Only a failed write to `out`
//! aborts.

use std::io::Write;

use anyhow::{Context, Result};
use garden_core::{Error, GardenConfig, GardenManager, Plant};
use serde_json::{json, Value};

/// Plant records fed to the garden, including two that must be rejected.
fn plant_records() -> [Value; 4] {
    [
        json!({"name": "Sakora", "height": 600, "age": 2143, "water_level": 8, "sunlight_hours": 10}),
        json!({"name": "Blue Spider Lily", "height": 25, "age": 45, "water_level": 9, "sunlight_hours": 15}),
        json!({"name": "", "height": 15, "age": 25, "water_level": 5, "sunlight_hours": 7}),
        json!({"name": 42, "height": 10, "age": 3, "water_level": 4, "sunlight_hours": 6}),
    ]
}

/// Run the demonstration, writing the transcript to `out`.
///
/// # Errors
///
/// Returns an error only if writing to `out` fails, or if the demo garden
/// itself cannot be set up from `config`.
pub fn run(out: &mut impl Write, config: &GardenConfig) -> Result<()> {
    writeln!(out, "=== Garden Management System ===")?;

    let mut garden = GardenManager::create("Konoha", "Naruto", 3)
        .context("Failed to create demo garden")?
        .with_thresholds(config.health)
        .context("Invalid health thresholds")?;
    flush_events(out, &mut garden)?;

    writeln!(out, "\nAdding plants to garden...")?;
    for record in plant_records() {
        match Plant::from_record(&record) {
            Ok(plant) => garden.add_plant(plant),
            Err(Error::Domain(err)) => writeln!(out, "Catch (Garden Management): {err}")?,
            Err(err) => writeln!(out, "Catch (Unexpected): {err}")?,
        }
        flush_events(out, &mut garden)?;
    }

    writeln!(out, "\nWatering plants...")?;
    writeln!(out, "Opening watering system...")?;
    let watered = garden.water_plants();
    flush_events(out, &mut garden)?;
    if let Err(err) = watered {
        writeln!(out, "Irrigation Error: {err}")?;
    }
    writeln!(out, "Closing watering system (cleanup)")?;

    writeln!(out, "\nChecking plant health...")?;
    let diagnosis = garden.check_plant_health();
    flush_events(out, &mut garden)?;
    if let Err(err) = diagnosis {
        writeln!(out, "Health Monitoring Alert: {err}")?;
    }

    writeln!(out, "\nTesting error recovery...")?;
    // Any specific kind is still a Garden error.
    if let Err(err) = garden.check_water_tank() {
        writeln!(out, "System Recovery Catch: {err}")?;
    }
    writeln!(out, "System integrity verified. Continuing operation...")?;

    writeln!(out, "\nGarden management system test complete!")?;
    Ok(())
}

fn flush_events(out: &mut impl Write, garden: &mut GardenManager) -> Result<()> {
    for recorded in garden.drain_events() {
        writeln!(out, "{}", recorded.event)?;
    }
    Ok(())
}
