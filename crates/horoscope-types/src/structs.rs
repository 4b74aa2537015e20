//! Chart records exchanged with clients.
//!
//! A [`Chart`] is built once per request and handed back to the caller. The
//! service never stores it: clients resubmit it when asking for transits,
//! so every record here deserializes leniently, with missing fields falling
//! back to placeholder values instead of failing the request.

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{AspectKind, MoonPhase, Planet};

/// Sign summary used when a body or house is missing from a snapshot.
pub const UNKNOWN_SIGN: &str = "Unknown";

fn unknown_sign() -> String {
    UNKNOWN_SIGN.to_owned()
}

/// Accept a phase name, an empty string, or `null`.
///
/// Older clients stored an empty string when no phase could be computed.
fn phase_or_empty<'de, D>(deserializer: D) -> Result<Option<MoonPhase>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(name) => MoonPhase::from_name(name)
            .map(Some)
            .ok_or_else(|| de::Error::unknown_variant(name, MoonPhase::NAMES)),
    }
}

// ---------------------------------------------------------------------------
// Snapshot records
// ---------------------------------------------------------------------------

/// A body's position in one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CelestialBody {
    /// Which body this is.
    pub name: Planet,
    /// Full sign name (engine codes that are not recognized pass through).
    #[serde(default)]
    pub sign: String,
    /// Degrees within the sign, `[0, 30)`.
    #[serde(default)]
    pub position: f64,
    /// Absolute ecliptic longitude, `[0, 360)`.
    #[serde(default)]
    pub abs_pos: f64,
    /// House placement (1-12) when the engine computed one.
    #[serde(default)]
    pub house: Option<u8>,
    /// Whether the body's apparent motion is retrograde.
    #[serde(default)]
    pub retrograde: bool,
}

/// The cusp (starting longitude) of one house.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct HouseCusp {
    /// House number, 1-12.
    pub house: u8,
    /// Full sign name of the cusp.
    #[serde(default)]
    pub sign: String,
    /// Degrees within the sign, `[0, 30)`.
    #[serde(default)]
    pub position: f64,
    /// Absolute ecliptic longitude, `[0, 360)`.
    #[serde(default)]
    pub abs_pos: f64,
}

/// An aspect found between two bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Aspect {
    /// First body (the transiting body in transit comparisons).
    pub planet1: Planet,
    /// Sign of the first body.
    pub sign1: String,
    /// Second body (the natal body in transit comparisons).
    pub planet2: Planet,
    /// Sign of the second body.
    pub sign2: String,
    /// Which aspect matched.
    pub aspect: AspectKind,
    /// Deviation from the exact aspect angle in degrees, 2 decimals.
    pub orb: f64,
}

// ---------------------------------------------------------------------------
// Natal chart
// ---------------------------------------------------------------------------

/// Birth parameters echoed back inside a chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "bindings/")]
pub struct BirthData {
    /// Calendar year.
    pub year: i32,
    /// Month, 1-12.
    pub month: u32,
    /// Day of month.
    pub day: u32,
    /// Local hour, 0-23.
    pub hour: u32,
    /// Local minute, 0-59.
    pub minute: u32,
    /// IANA timezone name the local time was given in.
    pub tz: String,
    /// Geographic latitude, if the caller supplied one.
    pub lat: Option<f64>,
    /// Geographic longitude (east positive), if the caller supplied one.
    pub lng: Option<f64>,
}

/// A complete natal chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "bindings/")]
pub struct Chart {
    /// Label the chart was requested for.
    pub name: String,
    /// The birth moment and place.
    pub birth_data: BirthData,
    /// Sign of the Sun.
    pub sun_sign: String,
    /// Sign of the Moon.
    pub moon_sign: String,
    /// Sign on the first house cusp.
    pub rising_sign: String,
    /// Lunar phase at birth.
    #[serde(deserialize_with = "phase_or_empty")]
    pub moon_phase_at_birth: Option<MoonPhase>,
    /// Positions of the tracked bodies.
    pub planets: Vec<CelestialBody>,
    /// The twelve house cusps.
    pub houses: Vec<HouseCusp>,
    /// Aspects among the natal bodies.
    pub natal_aspects: Vec<Aspect>,
    /// Names of bodies retrograde at birth.
    pub retrogrades_at_birth: Vec<Planet>,
}

impl Default for Chart {
    fn default() -> Self {
        Self {
            name: String::new(),
            birth_data: BirthData::default(),
            sun_sign: unknown_sign(),
            moon_sign: unknown_sign(),
            rising_sign: unknown_sign(),
            moon_phase_at_birth: None,
            planets: Vec::new(),
            houses: Vec::new(),
            natal_aspects: Vec::new(),
            retrogrades_at_birth: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Transit and sky reports
// ---------------------------------------------------------------------------

/// Transits for one date measured against a natal chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TransitReport {
    /// The target date as requested (or today's UTC date).
    pub date: String,
    /// Sign of the transiting Moon.
    pub moon_sign: String,
    /// Lunar phase on the target date.
    #[serde(default, deserialize_with = "phase_or_empty")]
    pub moon_phase: Option<MoonPhase>,
    /// Positions of the transiting bodies.
    pub current_planets: Vec<CelestialBody>,
    /// Transiting bodies currently retrograde.
    pub retrogrades: Vec<Planet>,
    /// Aspects from each transiting body to each natal body.
    pub transit_to_natal: Vec<Aspect>,
    /// Digest of the most significant transits, one item per line.
    pub summary: String,
}

/// Positions for the present moment, independent of any chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SkyReport {
    /// When the snapshot was taken.
    pub timestamp: DateTime<Utc>,
    /// Sign of the Moon.
    pub moon_sign: String,
    /// Current lunar phase.
    #[serde(default, deserialize_with = "phase_or_empty")]
    pub moon_phase: Option<MoonPhase>,
    /// Sign of the Sun.
    pub sun_sign: String,
    /// Current positions.
    pub planets: Vec<CelestialBody>,
    /// Bodies currently retrograde.
    pub retrogrades: Vec<Planet>,
    /// Leading aspects among the current positions.
    pub sky_aspects: Vec<Aspect>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn chart_with_missing_fields_uses_placeholders() {
        let chart: Chart = serde_json::from_str(r#"{"name": "Ada"}"#).unwrap();
        assert_eq!(chart.name, "Ada");
        assert_eq!(chart.sun_sign, UNKNOWN_SIGN);
        assert!(chart.planets.is_empty());
        assert_eq!(chart.moon_phase_at_birth, None);
    }

    #[test]
    fn chart_accepts_empty_moon_phase() {
        let chart: Chart =
            serde_json::from_str(r#"{"moon_phase_at_birth": ""}"#).unwrap();
        assert_eq!(chart.moon_phase_at_birth, None);

        let chart: Chart =
            serde_json::from_str(r#"{"moon_phase_at_birth": "Full Moon"}"#).unwrap();
        assert_eq!(chart.moon_phase_at_birth, Some(MoonPhase::FullMoon));
    }

    #[test]
    fn chart_rejects_unknown_moon_phase() {
        let result = serde_json::from_str::<Chart>(r#"{"moon_phase_at_birth": "Blue Moon"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn body_defaults_optional_fields() {
        let body: CelestialBody = serde_json::from_str(r#"{"name": "Mars"}"#).unwrap();
        assert_eq!(body.name, Planet::Mars);
        assert!(body.sign.is_empty());
        assert_eq!(body.house, None);
        assert!(!body.retrograde);
    }

    #[test]
    fn aspect_serializes_with_flat_field_names() {
        let aspect = Aspect {
            planet1: Planet::Saturn,
            sign1: "Pisces".to_owned(),
            planet2: Planet::Sun,
            sign2: "Virgo".to_owned(),
            aspect: AspectKind::Opposition,
            orb: 1.25,
        };
        let value = serde_json::to_value(&aspect).unwrap();
        assert_eq!(value["planet1"], "Saturn");
        assert_eq!(value["aspect"], "opposition");
        assert_eq!(value["sign2"], "Virgo");
    }
}
