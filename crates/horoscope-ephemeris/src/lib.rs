//! Ephemeris engine contract for the horoscope service.
//!
//! The chart aggregator never computes positions itself. It asks an
//! [`Ephemeris`] for a [`RawSnapshot`] of one moment and shapes the result.
//! A snapshot is a fixed-shape record: each of the ten bodies and twelve
//! houses is an optional [`RawPoint`] whose fields are themselves optional,
//! so an engine that omits data degrades to placeholders downstream instead
//! of failing the request.
//!
//! # Modules
//!
//! - [`analytic`] -- Built-in [`AnalyticEphemeris`] engine
//! - [`error`] -- [`EphemerisError`]
//! - [`houses`] -- Sidereal time, chart angles, Placidus cusps
//! - [`orbits`] -- Geocentric longitudes of the Sun, Moon, and planets
//! - [`time`] -- Civil time to Julian Day conversion
//!
//! [`AnalyticEphemeris`]: analytic::AnalyticEphemeris
//! [`EphemerisError`]: error::EphemerisError

pub mod analytic;
pub mod error;
pub mod houses;
pub mod orbits;
pub mod time;

use horoscope_types::Planet;

pub use analytic::AnalyticEphemeris;
pub use error::EphemerisError;

/// Normalize an angle into `[0, 360)` degrees.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// A point on the Earth's surface, degrees (east longitude positive).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geographic latitude, -90 to 90.
    pub lat: f64,
    /// Geographic longitude, -180 to 180.
    pub lng: f64,
}

impl GeoLocation {
    /// Whether both coordinates are finite and in range.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Everything an engine needs to compute one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotRequest {
    /// Label for the snapshot (the chart subject's name, `Transit`, `Now`).
    pub label: String,
    /// Local calendar year.
    pub year: i32,
    /// Local month, 1-12.
    pub month: u32,
    /// Local day of month.
    pub day: u32,
    /// Local hour, 0-23.
    pub hour: u32,
    /// Local minute, 0-59.
    pub minute: u32,
    /// IANA timezone the local time is expressed in.
    pub timezone: String,
    /// Observer location; `None` lets the engine use its default.
    pub location: Option<GeoLocation>,
    /// Whether the engine may resolve places over the network.
    pub online: bool,
}

/// Raw engine output for a single body or house cusp.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawPoint {
    /// Sign code as the engine reports it (e.g. `Ari`).
    pub sign: Option<String>,
    /// Degrees within the sign.
    pub position: Option<f64>,
    /// Absolute ecliptic longitude.
    pub abs_pos: Option<f64>,
    /// House placement, for bodies.
    pub house: Option<u8>,
    /// Retrograde flag, for bodies.
    pub retrograde: Option<bool>,
}

/// Raw engine output for one moment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSnapshot {
    /// The Sun.
    pub sun: Option<RawPoint>,
    /// The Moon.
    pub moon: Option<RawPoint>,
    /// Mercury.
    pub mercury: Option<RawPoint>,
    /// Venus.
    pub venus: Option<RawPoint>,
    /// Mars.
    pub mars: Option<RawPoint>,
    /// Jupiter.
    pub jupiter: Option<RawPoint>,
    /// Saturn.
    pub saturn: Option<RawPoint>,
    /// Uranus.
    pub uranus: Option<RawPoint>,
    /// Neptune.
    pub neptune: Option<RawPoint>,
    /// Pluto.
    pub pluto: Option<RawPoint>,
    /// House cusps 1 through 12.
    pub houses: [Option<RawPoint>; 12],
}

impl RawSnapshot {
    /// The raw point for a body, if the engine produced one.
    pub const fn body(&self, planet: Planet) -> Option<&RawPoint> {
        match planet {
            Planet::Sun => self.sun.as_ref(),
            Planet::Moon => self.moon.as_ref(),
            Planet::Mercury => self.mercury.as_ref(),
            Planet::Venus => self.venus.as_ref(),
            Planet::Mars => self.mars.as_ref(),
            Planet::Jupiter => self.jupiter.as_ref(),
            Planet::Saturn => self.saturn.as_ref(),
            Planet::Uranus => self.uranus.as_ref(),
            Planet::Neptune => self.neptune.as_ref(),
            Planet::Pluto => self.pluto.as_ref(),
        }
    }

    /// Store the raw point for a body.
    pub fn set_body(&mut self, planet: Planet, point: RawPoint) {
        *self.slot_mut(planet) = Some(point);
    }

    fn slot_mut(&mut self, planet: Planet) -> &mut Option<RawPoint> {
        match planet {
            Planet::Sun => &mut self.sun,
            Planet::Moon => &mut self.moon,
            Planet::Mercury => &mut self.mercury,
            Planet::Venus => &mut self.venus,
            Planet::Mars => &mut self.mars,
            Planet::Jupiter => &mut self.jupiter,
            Planet::Saturn => &mut self.saturn,
            Planet::Uranus => &mut self.uranus,
            Planet::Neptune => &mut self.neptune,
            Planet::Pluto => &mut self.pluto,
        }
    }
}

/// A source of planetary positions.
///
/// Implementations must be cheap to share across request handlers; the
/// API server holds one behind an `Arc` for its whole lifetime.
pub trait Ephemeris: Send + Sync {
    /// Short identifier reported by the health endpoint.
    fn identifier(&self) -> &str;

    /// Compute positions and house cusps for one moment.
    ///
    /// # Errors
    ///
    /// Returns [`EphemerisError`] when the date, time, timezone, or
    /// location cannot be resolved.
    fn snapshot(&self, request: &SnapshotRequest) -> Result<RawSnapshot, EphemerisError>;
}
