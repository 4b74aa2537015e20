//! Error types for ephemeris lookups.

/// Errors an ephemeris engine can report for a snapshot request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EphemerisError {
    /// The calendar date does not exist.
    #[error("invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Requested year.
        year: i32,
        /// Requested month.
        month: u32,
        /// Requested day.
        day: u32,
    },

    /// The time of day is out of range.
    #[error("invalid time {hour:02}:{minute:02}")]
    InvalidTime {
        /// Requested hour.
        hour: u32,
        /// Requested minute.
        minute: u32,
    },

    /// The timezone name is not a known IANA zone.
    #[error("unknown timezone '{name}': {reason}")]
    UnknownTimezone {
        /// The name that failed to parse.
        name: String,
        /// Parser message.
        reason: String,
    },

    /// The local time falls in a daylight-saving gap.
    #[error("local time {local} does not exist in timezone {timezone}")]
    NonexistentLocalTime {
        /// The requested local date-time.
        local: String,
        /// The timezone it was requested in.
        timezone: String,
    },

    /// Latitude or longitude is out of range.
    #[error("invalid coordinates lat={lat}, lng={lng}")]
    InvalidCoordinates {
        /// Requested latitude.
        lat: f64,
        /// Requested longitude.
        lng: f64,
    },
}
