//! Sidereal time, chart angles, and house cusps.
//!
//! Cusps follow the Placidus system: the intermediate cusps trisect the
//! diurnal and nocturnal semi-arcs of the ecliptic degree that occupies
//! them. Placidus is undefined inside the polar circles, where the cusps
//! fall back to Porphyry (equal trisection of each quadrant in longitude).

use crate::normalize_degrees;
use crate::time::{J2000, centuries_since_j2000};

/// Iteration cap for the semi-arc fixed point.
const MAX_ITERATIONS: usize = 50;

/// Convergence threshold for cusp iteration, degrees.
const CONVERGENCE: f64 = 1e-9;

/// Mean obliquity of the ecliptic, degrees.
pub fn obliquity(jd: f64) -> f64 {
    23.439_291 - 0.013_004_2 * centuries_since_j2000(jd)
}

/// Greenwich mean sidereal time, degrees.
pub fn greenwich_sidereal_time(jd: f64) -> f64 {
    let days = jd - J2000;
    let t = centuries_since_j2000(jd);
    normalize_degrees(
        280.460_618_37 + 360.985_647_366_29 * days + 0.000_387_933 * t * t
            - t * t * t / 38_710_000.0,
    )
}

/// Ecliptic longitude on the meridian for a right ascension of the MC.
pub fn midheaven(ramc: f64, obliquity: f64) -> f64 {
    let ramc = ramc.to_radians();
    let eps = obliquity.to_radians();
    normalize_degrees(ramc.sin().atan2(ramc.cos() * eps.cos()).to_degrees())
}

/// Ecliptic longitude rising on the eastern horizon.
pub fn ascendant(ramc: f64, obliquity: f64, latitude: f64) -> f64 {
    let ramc = ramc.to_radians();
    let eps = obliquity.to_radians();
    let phi = latitude.to_radians();
    let y = ramc.cos();
    let x = -(ramc.sin() * eps.cos() + phi.tan() * eps.sin());
    normalize_degrees(y.atan2(x).to_degrees())
}

/// Ecliptic longitude of the point on the ecliptic with a given right ascension.
fn longitude_from_right_ascension(ra: f64, obliquity: f64) -> f64 {
    let ra = ra.to_radians();
    normalize_degrees(ra.sin().atan2(ra.cos() * obliquity.to_radians().cos()).to_degrees())
}

/// Diurnal semi-arc of an ecliptic longitude, or `None` if it is circumpolar.
fn diurnal_semi_arc(longitude: f64, obliquity: f64, latitude: f64) -> Option<f64> {
    let declination = (obliquity.to_radians().sin() * longitude.to_radians().sin()).asin();
    let cosine = -latitude.to_radians().tan() * declination.tan();
    if cosine.abs() > 1.0 {
        return None;
    }
    Some(cosine.acos().to_degrees())
}

/// Which side of the horizon a Placidus cusp lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hemisphere {
    /// Houses 11 and 12, between MC and Ascendant.
    Above,
    /// Houses 2 and 3, between Ascendant and IC.
    Below,
}

/// Solve one intermediate Placidus cusp.
///
/// `fraction` is the part of the semi-arc between the meridian side of the
/// quadrant and the cusp: 1/3 for house 11, 2/3 for house 12, 2/3 for
/// house 2, 1/3 for house 3.
fn placidus_cusp(
    ramc: f64,
    obliquity: f64,
    latitude: f64,
    fraction: f64,
    hemisphere: Hemisphere,
    initial_offset: f64,
) -> Option<f64> {
    let mut longitude = longitude_from_right_ascension(ramc + initial_offset, obliquity);
    for _ in 0..MAX_ITERATIONS {
        let dsa = diurnal_semi_arc(longitude, obliquity, latitude)?;
        let ra = match hemisphere {
            Hemisphere::Above => ramc + fraction * dsa,
            Hemisphere::Below => ramc + 180.0 - fraction * (180.0 - dsa),
        };
        let next = longitude_from_right_ascension(ra, obliquity);
        let moved = (next - longitude).abs();
        longitude = next;
        if moved < CONVERGENCE || (360.0 - moved) < CONVERGENCE {
            break;
        }
    }
    Some(longitude)
}

/// Placidus intermediate cusps `(c11, c12, c2, c3)`.
fn placidus_intermediates(
    ramc: f64,
    obliquity: f64,
    latitude: f64,
) -> Option<(f64, f64, f64, f64)> {
    let c11 = placidus_cusp(ramc, obliquity, latitude, 1.0 / 3.0, Hemisphere::Above, 30.0)?;
    let c12 = placidus_cusp(ramc, obliquity, latitude, 2.0 / 3.0, Hemisphere::Above, 60.0)?;
    let c2 = placidus_cusp(ramc, obliquity, latitude, 2.0 / 3.0, Hemisphere::Below, 120.0)?;
    let c3 = placidus_cusp(ramc, obliquity, latitude, 1.0 / 3.0, Hemisphere::Below, 150.0)?;
    Some((c11, c12, c2, c3))
}

/// Porphyry intermediate cusps `(c11, c12, c2, c3)` from the chart angles.
fn porphyry_intermediates(asc: f64, mc: f64) -> (f64, f64, f64, f64) {
    let upper = normalize_degrees(asc - mc);
    let lower = normalize_degrees(mc + 180.0 - asc);
    (
        normalize_degrees(mc + upper / 3.0),
        normalize_degrees(mc + 2.0 * upper / 3.0),
        normalize_degrees(asc + lower / 3.0),
        normalize_degrees(asc + 2.0 * lower / 3.0),
    )
}

/// The twelve house cusps, house 1 first, as absolute longitudes.
pub fn house_cusps(ramc: f64, obliquity: f64, latitude: f64) -> [f64; 12] {
    let asc = ascendant(ramc, obliquity, latitude);
    let mc = midheaven(ramc, obliquity);

    let placidus = placidus_intermediates(ramc, obliquity, latitude);
    let polar = latitude.abs() >= 90.0 - obliquity;
    let (c11, c12, c2, c3) = match placidus {
        Some(cusps) if !polar => cusps,
        _ => porphyry_intermediates(asc, mc),
    };

    [
        asc,
        c2,
        c3,
        mc + 180.0,
        c11 + 180.0,
        c12 + 180.0,
        asc + 180.0,
        c2 + 180.0,
        c3 + 180.0,
        mc,
        c11,
        c12,
    ]
    .map(normalize_degrees)
}

/// The house (1-12) whose cusp arc contains a longitude.
pub fn house_of(longitude: f64, cusps: &[f64; 12]) -> Option<u8> {
    let next_cusps = cusps.iter().cycle().skip(1);
    (1..=12u8)
        .zip(cusps.iter().zip(next_cusps))
        .find(|&(_, (&start, &end))| {
            let span = normalize_degrees(end - start);
            let offset = normalize_degrees(longitude - start);
            offset < span
        })
        .map(|(house, _)| house)
}
