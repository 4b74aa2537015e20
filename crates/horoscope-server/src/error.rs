//! Error types for the service binary.
//!
//! [`AppError`] wraps every failure mode of startup and serving so that
//! `main` can propagate with `?`.

/// Top-level error for the service binary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: horoscope_core::config::ConfigError,
    },

    /// The configured default location is out of range.
    #[error("invalid default location lat={lat}, lng={lng}")]
    DefaultLocation {
        /// Configured latitude.
        lat: f64,
        /// Configured longitude.
        lng: f64,
    },

    /// The HTTP server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: horoscope_api::ServerError,
    },
}
