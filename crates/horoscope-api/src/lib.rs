//! HTTP API for the horoscope service.
//!
//! This crate exposes the chart operations over a small JSON API:
//!
//! - **`GET /health`** reports liveness and the active ephemeris engine
//! - **`POST /natal-chart`** computes a natal chart from birth details
//! - **`POST /daily-transits`** compares a date's sky with a submitted chart
//! - **`GET /current-sky`** reports the sky right now
//!
//! # Architecture
//!
//! The service is stateless. Handlers share one [`AppState`] holding the
//! engine behind an `Arc`; every request computes its result from scratch
//! and nothing is stored between requests. Clients keep their own charts
//! and resubmit them for transits.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
