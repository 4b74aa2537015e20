//! Enumeration types for the horoscope service.
//!
//! The fixed tables of the domain live here as `const` data: the ten
//! tracked bodies, the twelve zodiac signs with their three-letter engine
//! codes, the five major aspects, and the eight lunar phases.

use core::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Planets
// ---------------------------------------------------------------------------

/// A tracked celestial body (luminaries plus the eight planets, Pluto included).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Planet {
    /// The Sun.
    Sun,
    /// The Moon.
    Moon,
    /// Mercury.
    Mercury,
    /// Venus.
    Venus,
    /// Mars.
    Mars,
    /// Jupiter.
    Jupiter,
    /// Saturn.
    Saturn,
    /// Uranus.
    Uranus,
    /// Neptune.
    Neptune,
    /// Pluto.
    Pluto,
}

impl Planet {
    /// Every tracked body, in the order charts list them.
    pub const ALL: [Self; 10] = [
        Self::Sun,
        Self::Moon,
        Self::Mercury,
        Self::Venus,
        Self::Mars,
        Self::Jupiter,
        Self::Saturn,
        Self::Uranus,
        Self::Neptune,
        Self::Pluto,
    ];

    /// Bodies whose transits are ranked first in a transit digest.
    pub const SLOW: [Self; 5] = [
        Self::Saturn,
        Self::Jupiter,
        Self::Uranus,
        Self::Neptune,
        Self::Pluto,
    ];

    /// Display name of the body.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// Whether this is one of the outer, slow-moving bodies.
    pub const fn is_slow(self) -> bool {
        matches!(
            self,
            Self::Jupiter | Self::Saturn | Self::Uranus | Self::Neptune | Self::Pluto
        )
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Zodiac signs
// ---------------------------------------------------------------------------

/// One of the twelve 30-degree sectors of the tropical zodiac.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum ZodiacSign {
    /// 0° to 30°.
    Aries,
    /// 30° to 60°.
    Taurus,
    /// 60° to 90°.
    Gemini,
    /// 90° to 120°.
    Cancer,
    /// 120° to 150°.
    Leo,
    /// 150° to 180°.
    Virgo,
    /// 180° to 210°.
    Libra,
    /// 210° to 240°.
    Scorpio,
    /// 240° to 270°.
    Sagittarius,
    /// 270° to 300°.
    Capricorn,
    /// 300° to 330°.
    Aquarius,
    /// 330° to 360°.
    Pisces,
}

impl ZodiacSign {
    /// All signs in zodiacal order starting at 0° Aries.
    pub const ALL: [Self; 12] = [
        Self::Aries,
        Self::Taurus,
        Self::Gemini,
        Self::Cancer,
        Self::Leo,
        Self::Virgo,
        Self::Libra,
        Self::Scorpio,
        Self::Sagittarius,
        Self::Capricorn,
        Self::Aquarius,
        Self::Pisces,
    ];

    /// Width of one sign in degrees.
    pub const SPAN_DEGREES: f64 = 30.0;

    /// The sign containing an absolute ecliptic longitude.
    ///
    /// The longitude is normalized into `[0, 360)` first, so any finite
    /// value is accepted.
    pub fn from_longitude(longitude: f64) -> Self {
        let normalized = longitude.rem_euclid(360.0);
        // Bounded to 0..=12 by the normalization above.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = (normalized / Self::SPAN_DEGREES).floor() as usize;
        // rem_euclid can round up to exactly 360.0 for tiny negative inputs,
        // which is 0° Aries.
        Self::ALL.get(index).copied().unwrap_or(Self::Aries)
    }

    /// Look up a sign by its three-letter engine code (`Ari`, `Tau`, ...).
    pub fn from_abbreviation(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|sign| sign.abbreviation() == code)
    }

    /// Full English name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Three-letter code used by ephemeris engines.
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Aries => "Ari",
            Self::Taurus => "Tau",
            Self::Gemini => "Gem",
            Self::Cancer => "Can",
            Self::Leo => "Leo",
            Self::Virgo => "Vir",
            Self::Libra => "Lib",
            Self::Scorpio => "Sco",
            Self::Sagittarius => "Sag",
            Self::Capricorn => "Cap",
            Self::Aquarius => "Aqu",
            Self::Pisces => "Pis",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Aspects
// ---------------------------------------------------------------------------

/// A major angular relationship between two ecliptic longitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum AspectKind {
    /// 0°.
    Conjunction,
    /// 60°.
    Sextile,
    /// 90°.
    Square,
    /// 120°.
    Trine,
    /// 180°.
    Opposition,
}

impl AspectKind {
    /// Lowercase name as it appears in payloads and digests.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "conjunction",
            Self::Sextile => "sextile",
            Self::Square => "square",
            Self::Trine => "trine",
            Self::Opposition => "opposition",
        }
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Moon phases
// ---------------------------------------------------------------------------

/// One of eight 45-degree lunar phase bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum MoonPhase {
    /// Elongation within 22.5° of conjunction.
    #[serde(rename = "New Moon")]
    NewMoon,
    /// 22.5° to 67.5°.
    #[serde(rename = "Waxing Crescent")]
    WaxingCrescent,
    /// 67.5° to 112.5°.
    #[serde(rename = "First Quarter")]
    FirstQuarter,
    /// 112.5° to 157.5°.
    #[serde(rename = "Waxing Gibbous")]
    WaxingGibbous,
    /// 157.5° to 202.5°.
    #[serde(rename = "Full Moon")]
    FullMoon,
    /// 202.5° to 247.5°.
    #[serde(rename = "Waning Gibbous")]
    WaningGibbous,
    /// 247.5° to 292.5°.
    #[serde(rename = "Last Quarter")]
    LastQuarter,
    /// 292.5° to 337.5°.
    #[serde(rename = "Waning Crescent")]
    WaningCrescent,
}

impl MoonPhase {
    /// Phases in order of increasing elongation.
    pub const ALL: [Self; 8] = [
        Self::NewMoon,
        Self::WaxingCrescent,
        Self::FirstQuarter,
        Self::WaxingGibbous,
        Self::FullMoon,
        Self::WaningGibbous,
        Self::LastQuarter,
        Self::WaningCrescent,
    ];

    /// Serialized names, parallel to [`MoonPhase::ALL`].
    pub const NAMES: &'static [&'static str] = &[
        "New Moon",
        "Waxing Crescent",
        "First Quarter",
        "Waxing Gibbous",
        "Full Moon",
        "Waning Gibbous",
        "Last Quarter",
        "Waning Crescent",
    ];

    /// Human-readable phase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }

    /// Parse a phase from its human-readable name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|phase| phase.name() == name)
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn sign_from_longitude_uses_thirty_degree_sectors() {
        assert_eq!(ZodiacSign::from_longitude(0.0), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(29.999), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(30.0), ZodiacSign::Taurus);
        assert_eq!(ZodiacSign::from_longitude(185.0), ZodiacSign::Libra);
        assert_eq!(ZodiacSign::from_longitude(359.9), ZodiacSign::Pisces);
    }

    #[test]
    fn sign_from_longitude_normalizes_out_of_range_values() {
        assert_eq!(ZodiacSign::from_longitude(360.0), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(-15.0), ZodiacSign::Pisces);
        assert_eq!(ZodiacSign::from_longitude(-1e-18), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(725.0), ZodiacSign::Aries);
    }

    #[test]
    fn abbreviations_round_trip_to_signs() {
        for sign in ZodiacSign::ALL {
            assert_eq!(ZodiacSign::from_abbreviation(sign.abbreviation()), Some(sign));
        }
        assert_eq!(ZodiacSign::from_abbreviation("Xyz"), None);
        assert_eq!(ZodiacSign::from_abbreviation("Aries"), None);
    }

    #[test]
    fn slow_planets_are_the_outer_five() {
        let slow: Vec<Planet> = Planet::ALL.into_iter().filter(|p| p.is_slow()).collect();
        assert_eq!(slow.len(), 5);
        for planet in Planet::SLOW {
            assert!(planet.is_slow());
        }
        assert!(!Planet::Sun.is_slow());
        assert!(!Planet::Mars.is_slow());
    }

    #[test]
    fn moon_phase_serializes_with_spaced_names() {
        let json = serde_json::to_string(&MoonPhase::WaxingGibbous).unwrap();
        assert_eq!(json, "\"Waxing Gibbous\"");
        let back: MoonPhase = serde_json::from_str("\"Last Quarter\"").unwrap();
        assert_eq!(back, MoonPhase::LastQuarter);
    }

    #[test]
    fn moon_phase_names_match_display() {
        for (phase, name) in MoonPhase::ALL.into_iter().zip(MoonPhase::NAMES) {
            assert_eq!(phase.name(), *name);
            assert_eq!(MoonPhase::from_name(name), Some(phase));
        }
    }

    #[test]
    fn aspect_kind_serializes_lowercase() {
        let json = serde_json::to_string(&AspectKind::Opposition).unwrap();
        assert_eq!(json, "\"opposition\"");
        assert_eq!(AspectKind::Trine.to_string(), "trine");
    }
}
