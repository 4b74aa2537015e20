//! Error type for chart operations.

use horoscope_ephemeris::EphemerisError;

/// Errors that can occur while building a chart or report.
///
/// Every variant describes bad client input; the API maps all of them to
/// `400 Bad Request`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChartError {
    /// The ephemeris engine rejected the request.
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),

    /// A transit target date could not be parsed.
    #[error("invalid target date '{input}': expected YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS]")]
    InvalidTargetDate {
        /// The text that was supplied.
        input: String,
    },
}
