//! Horoscope astrology service binary.
//!
//! Wires configuration, logging, the ephemeris engine, and the HTTP API
//! together, then serves until `Ctrl-C`.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `horoscope-config.yaml` (defaults if absent)
//! 2. Initialize structured logging (tracing)
//! 3. Build the analytic ephemeris with the configured default location
//! 4. Serve the API

mod error;

use std::path::Path;
use std::sync::Arc;

use horoscope_api::{AppState, ServerConfig, start_server};
use horoscope_core::ChartDefaults;
use horoscope_core::config::{ChartConfig, HoroscopeConfig};
use horoscope_ephemeris::{AnalyticEphemeris, GeoLocation};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Configuration file read from the working directory.
const CONFIG_PATH: &str = "horoscope-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the server fails.
#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Load configuration.
    let config_path = Path::new(CONFIG_PATH);
    let config = load_config(config_path)?;

    // 2. Initialize structured logging. RUST_LOG wins over the config file.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("horoscope-server starting");
    if config_path.exists() {
        info!(path = CONFIG_PATH, "Configuration loaded");
    } else {
        info!("Config file not found, using defaults");
    }

    // 3. Build the engine.
    let location = default_location(&config.chart)?;
    let engine = AnalyticEphemeris::new(location);
    info!(
        lat = location.lat,
        lng = location.lng,
        default_timezone = %config.chart.default_timezone,
        "Ephemeris engine ready"
    );

    // 4. Serve.
    let state = Arc::new(AppState::new(
        Arc::new(engine),
        ChartDefaults::from(&config.chart),
    ));
    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };
    start_server(&server_config, state).await?;

    info!("horoscope-server stopped");
    Ok(())
}

/// Load configuration from `path`, falling back to defaults if it is absent.
fn load_config(path: &Path) -> Result<HoroscopeConfig, AppError> {
    if path.exists() {
        Ok(HoroscopeConfig::from_file(path)?)
    } else {
        Ok(HoroscopeConfig::parse("")?)
    }
}

/// The engine's fallback location, validated.
fn default_location(chart: &ChartConfig) -> Result<GeoLocation, AppError> {
    let location = GeoLocation {
        lat: chart.default_latitude,
        lng: chart.default_longitude,
    };
    if location.is_valid() {
        Ok(location)
    } else {
        Err(AppError::DefaultLocation {
            lat: location.lat,
            lng: location.lng,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_file_yields_defaults() {
        let config = load_config(Path::new("/nonexistent/horoscope-config.yaml")).unwrap();
        assert_eq!(config.chart, ChartConfig::default());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn default_location_is_validated() {
        let location = default_location(&ChartConfig::default()).unwrap();
        assert!((location.lat - 51.4769).abs() < 1e-9);

        let bad = ChartConfig {
            default_latitude: 95.0,
            ..ChartConfig::default()
        };
        assert!(matches!(
            default_location(&bad),
            Err(AppError::DefaultLocation { .. })
        ));
    }
}
