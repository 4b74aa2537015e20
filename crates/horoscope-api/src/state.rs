//! Shared application state for the API server.
//!
//! [`AppState`] holds the ephemeris engine and the chart defaults. Both
//! are read-only for the lifetime of the server, so handlers share them
//! without locking.

use std::sync::Arc;

use horoscope_core::ChartDefaults;
use horoscope_ephemeris::Ephemeris;

/// Top-level shared state for the API server.
pub struct AppState {
    /// Source of planetary positions.
    pub engine: Arc<dyn Ephemeris>,
    /// Defaults applied to natal chart requests.
    pub defaults: ChartDefaults,
}

impl AppState {
    /// Create state around an engine.
    pub const fn new(engine: Arc<dyn Ephemeris>, defaults: ChartDefaults) -> Self {
        Self { engine, defaults }
    }
}
