//! Snapshot to record conversion.
//!
//! Engines report signs as three-letter codes and may leave any field out.
//! Extraction expands the codes and fills gaps with placeholders so a
//! partial snapshot still produces a usable chart.

use horoscope_ephemeris::{RawPoint, RawSnapshot};
use horoscope_types::{CelestialBody, HouseCusp, Planet, UNKNOWN_SIGN, ZodiacSign};

/// Expand an engine sign code to the full sign name.
///
/// Codes outside the twelve known abbreviations pass through unchanged.
pub fn full_sign_name(code: &str) -> String {
    ZodiacSign::from_abbreviation(code)
        .map_or_else(|| code.to_owned(), |sign| sign.name().to_owned())
}

fn sign_or(point: &RawPoint, missing: &str) -> String {
    point
        .sign
        .as_deref()
        .map_or_else(|| missing.to_owned(), full_sign_name)
}

/// Bodies present in a snapshot, in the fixed Sun-to-Pluto order.
///
/// Bodies the engine did not report are left out rather than invented.
pub fn extract_bodies(snapshot: &RawSnapshot) -> Vec<CelestialBody> {
    Planet::ALL
        .into_iter()
        .filter_map(|planet| {
            let point = snapshot.body(planet)?;
            Some(CelestialBody {
                name: planet,
                sign: sign_or(point, UNKNOWN_SIGN),
                position: point.position.unwrap_or(0.0),
                abs_pos: point.abs_pos.unwrap_or(0.0),
                house: point.house,
                retrograde: point.retrograde.unwrap_or(false),
            })
        })
        .collect()
}

/// House cusps present in a snapshot, house 1 first.
pub fn extract_houses(snapshot: &RawSnapshot) -> Vec<HouseCusp> {
    (1..=12u8)
        .zip(snapshot.houses.iter())
        .filter_map(|(house, slot)| {
            let point = slot.as_ref()?;
            Some(HouseCusp {
                house,
                sign: sign_or(point, ""),
                position: point.position.unwrap_or(0.0),
                abs_pos: point.abs_pos.unwrap_or(0.0),
            })
        })
        .collect()
}

/// Names of the retrograde bodies, in body order.
pub fn retrograde_names(bodies: &[CelestialBody]) -> Vec<Planet> {
    bodies
        .iter()
        .filter(|body| body.retrograde)
        .map(|body| body.name)
        .collect()
}

/// The sign of a named body, or `"Unknown"` if it is absent.
pub fn sign_of(bodies: &[CelestialBody], planet: Planet) -> String {
    bodies
        .iter()
        .find(|body| body.name == planet)
        .map_or_else(|| UNKNOWN_SIGN.to_owned(), |body| body.sign.clone())
}
