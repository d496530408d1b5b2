//! Garden-core - validated plants and water accounting
//!
//! This crate provides:
//! - A domain error taxonomy rooted at `GardenError`
//! - `Plant`, built only through a validating constructor
//! - `GardenManager`, owner of the plant collection and the water stock
//! - Health diagnostics that wrap findings with the offending plant's name
//! - Garden events and threshold configuration
//!
//! Nothing here prints or touches the filesystem; successful operations
//! record [`GardenEvent`]s for the caller to render.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![cfg_attr(test, allow(clippy::expect_used))]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod events;
pub mod garden;
pub mod health;
pub mod name;
pub mod plant;
pub mod record;

pub use config::{Bounds, GardenConfig, HealthThresholds};
pub use error::{Error, ErrorKind, GardenError, Result, TypeMismatch};
pub use events::{GardenEvent, RecordedEvent};
pub use garden::{GardenManager, WATER_PER_PLANT};
pub use health::check_plant;
pub use name::Name;
pub use plant::Plant;
