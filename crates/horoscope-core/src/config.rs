//! Configuration loading and typed config structures for the horoscope service.
//!
//! The configuration lives in `horoscope-config.yaml` next to the binary's
//! working directory. Every field has a default, so an empty or missing file
//! yields a working service listening on port 8001.

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level service configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HoroscopeConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerSettings,

    /// Defaults applied to chart requests.
    #[serde(default)]
    pub chart: ChartConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl HoroscopeConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values for the listener:
    /// - `HOROSCOPE_HOST` overrides `server.host`
    /// - `HOROSCOPE_PORT` overrides `server.port`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.server.apply_env_overrides();
        Ok(config)
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSettings {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerSettings {
    /// Apply environment variable overrides.
    ///
    /// A `HOROSCOPE_PORT` that is not a valid port number is ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("HOROSCOPE_HOST") {
            self.host = val;
        }
        if let Some(port) = std::env::var("HOROSCOPE_PORT")
            .ok()
            .and_then(|val| val.parse().ok())
        {
            self.port = port;
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Defaults for chart requests that leave fields out.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartConfig {
    /// IANA timezone used when a birth time carries none.
    #[serde(default = "default_timezone")]
    pub default_timezone: String,

    /// Latitude used when a request gives no location.
    #[serde(default = "default_latitude")]
    pub default_latitude: f64,

    /// Longitude (east positive) used when a request gives no location.
    #[serde(default = "default_longitude")]
    pub default_longitude: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            default_timezone: default_timezone(),
            default_latitude: default_latitude(),
            default_longitude: default_longitude(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error) when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions
// ---------------------------------------------------------------------------

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    8001
}

fn default_timezone() -> String {
    "UTC".to_owned()
}

const fn default_latitude() -> f64 {
    51.4769
}

const fn default_longitude() -> f64 {
    -0.0005
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = HoroscopeConfig::default();
        assert_eq!(config.server.port, 8001);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.chart.default_timezone, "UTC");
        assert!((config.chart.default_latitude - 51.4769).abs() < 1e-9);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
server:
  host: "127.0.0.1"
  port: 9100

chart:
  default_timezone: "Europe/Paris"
  default_latitude: 48.8566
  default_longitude: 2.3522

logging:
  level: "debug"
"#;
        let config = HoroscopeConfig::parse(yaml).unwrap();
        assert_eq!(config.chart.default_timezone, "Europe/Paris");
        assert!((config.chart.default_longitude - 2.3522).abs() < 1e-9);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn parse_minimal_yaml() {
        let config = HoroscopeConfig::parse("logging:\n  level: warn\n").unwrap();
        assert_eq!(config.logging.level, "warn");
        // Everything else uses defaults
        assert_eq!(config.chart, ChartConfig::default());
    }

    #[test]
    fn parse_empty_yaml() {
        assert!(HoroscopeConfig::parse("").is_ok());
    }

    #[test]
    fn parse_invalid_yaml() {
        let result = HoroscopeConfig::parse("server: [unterminated");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = HoroscopeConfig::from_file(Path::new("/nonexistent/horoscope-config.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn load_project_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("horoscope-config.yaml");
        if path.exists() {
            let config = HoroscopeConfig::from_file(&path);
            assert!(config.is_ok(), "Failed to load project config: {config:?}");
        }
    }
}
