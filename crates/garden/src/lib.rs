//! Garden - scripted demonstration of garden-core
//!
//! Drives a small garden through plant registration, watering, health
//! diagnostics and recovery, printing how each failure is caught.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![cfg_attr(test, allow(clippy::expect_used))]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod demo;
