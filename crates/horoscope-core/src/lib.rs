//! Chart aggregation and transit analysis for the horoscope service.
//!
//! This crate turns raw ephemeris snapshots into the records clients see.
//! Everything here is a pure function of its inputs: the engine is passed
//! in, the current time is passed in, and nothing is cached between calls.
//!
//! # Modules
//!
//! - [`aspects`] -- Aspect table and pairwise aspect detection
//! - [`chart`] -- Natal chart, daily transits, and current sky operations
//! - [`config`] -- Configuration loading from `horoscope-config.yaml`
//! - [`error`] -- [`ChartError`]
//! - [`extract`] -- Snapshot to [`CelestialBody`] / [`HouseCusp`] conversion
//! - [`moon`] -- Lunar phase classification
//! - [`summary`] -- Ranked plain-text transit digest
//!
//! [`ChartError`]: error::ChartError
//! [`CelestialBody`]: horoscope_types::CelestialBody
//! [`HouseCusp`]: horoscope_types::HouseCusp

pub mod aspects;
pub mod chart;
pub mod config;
pub mod error;
pub mod extract;
pub mod moon;
pub mod summary;

pub use chart::{ChartDefaults, NatalChartRequest, current_sky, daily_transits, natal_chart};
pub use error::ChartError;
