//! Garden configuration
//!
//! Only the health-diagnostic thresholds are configurable. Every section
//! is `#[serde(default)]`, so a partial TOML document overrides just the
//! keys it names:
//!
//! ```toml
//! [health.sunlight]
//! min = 3
//! max = 14
//! ```
//!
//! A range given in the document must name both `min` and `max`.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ═══════════════════════════════════════════════════════════════════════════
// TYPES
// ═══════════════════════════════════════════════════════════════════════════

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GardenConfig {
    pub health: HealthThresholds,
}

/// Acceptable ranges checked by the health diagnostic
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HealthThresholds {
    pub water: Bounds,
    pub sunlight: Bounds,
}

/// Inclusive `[min, max]` range
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bounds {
    pub min: u64,
    pub max: u64,
}

// ═══════════════════════════════════════════════════════════════════════════
// DEFAULTS
// ═══════════════════════════════════════════════════════════════════════════

impl Default for HealthThresholds {
    fn default() -> Self {
        Self {
            water: Bounds::new(1, 10),
            sunlight: Bounds::new(2, 12),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BEHAVIOUR
// ═══════════════════════════════════════════════════════════════════════════

impl Bounds {
    #[must_use]
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub const fn contains(&self, value: u64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl GardenConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every range is non-empty.
    pub fn validate(&self) -> Result<()> {
        self.health.validate()
    }
}

impl HealthThresholds {
    /// Check that both ranges are non-empty.
    pub fn validate(&self) -> Result<()> {
        validate_bounds("health.water", self.water)?;
        validate_bounds("health.sunlight", self.sunlight)
    }
}

fn validate_bounds(key: &str, bounds: Bounds) -> Result<()> {
    if bounds.min > bounds.max {
        return Err(Error::InvalidConfig(format!(
            "{key}: min ({}) must not exceed max ({})",
            bounds.min, bounds.max
        )));
    }
    Ok(())
}
