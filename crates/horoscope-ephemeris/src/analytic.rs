//! Built-in analytic ephemeris engine.
//!
//! [`AnalyticEphemeris`] computes everything locally from closed-form
//! orbital theory, so the service runs without ephemeris data files or
//! network access. Sign codes are reported in the three-letter form
//! external engines use; the aggregator expands them.

use horoscope_types::{Planet, ZodiacSign};
use tracing::debug;

use crate::error::EphemerisError;
use crate::houses::{greenwich_sidereal_time, house_cusps, house_of, obliquity};
use crate::orbits::{daily_motion, geocentric_longitude};
use crate::time::{julian_day, to_utc};
use crate::{Ephemeris, GeoLocation, RawPoint, RawSnapshot, SnapshotRequest, normalize_degrees};

/// Identifier reported by the health endpoint.
pub const ENGINE_ID: &str = "analytic-kepler";

/// Royal Observatory, Greenwich.
pub const GREENWICH: GeoLocation = GeoLocation {
    lat: 51.4769,
    lng: -0.0005,
};

/// Analytic ephemeris with a configurable fallback location.
#[derive(Debug, Clone)]
pub struct AnalyticEphemeris {
    default_location: GeoLocation,
}

impl AnalyticEphemeris {
    /// Create an engine that places location-less charts at `default_location`.
    pub const fn new(default_location: GeoLocation) -> Self {
        Self { default_location }
    }

    /// The location used when a request carries none.
    pub const fn default_location(&self) -> GeoLocation {
        self.default_location
    }
}

impl Default for AnalyticEphemeris {
    fn default() -> Self {
        Self::new(GREENWICH)
    }
}

/// Build a raw point for an absolute longitude.
fn point_at(longitude: f64) -> RawPoint {
    let sign = ZodiacSign::from_longitude(longitude);
    RawPoint {
        sign: Some(sign.abbreviation().to_owned()),
        position: Some(longitude.rem_euclid(ZodiacSign::SPAN_DEGREES)),
        abs_pos: Some(longitude),
        house: None,
        retrograde: None,
    }
}

impl Ephemeris for AnalyticEphemeris {
    fn identifier(&self) -> &str {
        ENGINE_ID
    }

    fn snapshot(&self, request: &SnapshotRequest) -> Result<RawSnapshot, EphemerisError> {
        let location = request.location.unwrap_or(self.default_location);
        if !location.is_valid() {
            return Err(EphemerisError::InvalidCoordinates {
                lat: location.lat,
                lng: location.lng,
            });
        }
        if request.online {
            debug!(
                label = %request.label,
                "network lookups unsupported, using coordinates as given"
            );
        }

        let instant = to_utc(
            request.year,
            request.month,
            request.day,
            request.hour,
            request.minute,
            &request.timezone,
        )?;
        let jd = julian_day(instant);

        let eps = obliquity(jd);
        let ramc = normalize_degrees(greenwich_sidereal_time(jd) + location.lng);
        let cusps = house_cusps(ramc, eps, location.lat);

        let mut snapshot = RawSnapshot::default();
        for planet in Planet::ALL {
            let longitude = geocentric_longitude(planet, jd);
            let mut point = point_at(longitude);
            point.house = house_of(longitude, &cusps);
            point.retrograde = Some(daily_motion(planet, jd) < 0.0);
            snapshot.set_body(planet, point);
        }

        snapshot.houses = cusps.map(|cusp| Some(point_at(cusp)));

        debug!(
            label = %request.label,
            utc = %instant,
            jd,
            lat = location.lat,
            lng = location.lng,
            "ephemeris snapshot computed"
        );

        Ok(snapshot)
    }
}
