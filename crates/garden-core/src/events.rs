//! Garden events
//!
//! Events are facts about successful operations: a plant was registered,
//! watered, or passed its health check. The manager records them in a
//! journal instead of printing, so the caller decides how they are shown.
//! Failed operations record nothing.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Something that happened to a plant in a garden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type", content = "data", rename_all = "snake_case")]
pub enum GardenEvent {
    /// A plant joined the garden
    PlantAdded { plant: String, garden: String },

    /// One unit of water went to a plant
    PlantWatered { plant: String, remaining_stock: u64 },

    /// A plant passed its health diagnostic
    PlantHealthy {
        plant: String,
        water_level: u64,
        sunlight_hours: u64,
    },
}

impl GardenEvent {
    /// Get the event type as a string
    #[must_use]
    pub const fn event_type(&self) -> &'static str {
        match self {
            Self::PlantAdded { .. } => "plant_added",
            Self::PlantWatered { .. } => "plant_watered",
            Self::PlantHealthy { .. } => "plant_healthy",
        }
    }

    /// Name of the plant the event is about
    #[must_use]
    pub fn plant(&self) -> &str {
        match self {
            Self::PlantAdded { plant, .. }
            | Self::PlantWatered { plant, .. }
            | Self::PlantHealthy { plant, .. } => plant,
        }
    }
}

impl fmt::Display for GardenEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlantAdded { plant, garden } => write!(f, "Success: {plant} added to {garden}."),
            Self::PlantWatered { plant, .. } => write!(f, "Irrigating {plant} - OK"),
            Self::PlantHealthy {
                plant,
                water_level,
                sunlight_hours,
            } => write!(
                f,
                "Status - {}: healthy (H2O: {water_level}, UV: {sunlight_hours})",
                plant.to_lowercase()
            ),
        }
    }
}

/// An event with the time it was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedEvent {
    pub event: GardenEvent,
    pub recorded_at: DateTime<Utc>,
}

impl RecordedEvent {
    #[must_use]
    pub fn now(event: GardenEvent) -> Self {
        Self {
            event,
            recorded_at: Utc::now(),
        }
    }
}
