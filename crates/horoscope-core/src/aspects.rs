//! Aspect detection between two sets of bodies.
//!
//! Two bodies form an aspect when their angular separation falls within
//! the orb of one of the five major aspect angles. The table is checked in
//! order and the first match wins, so each ordered pair yields at most one
//! aspect.

use horoscope_types::{Aspect, AspectKind, CelestialBody};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// One row of the aspect table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectDefinition {
    /// Which aspect this row describes.
    pub kind: AspectKind,
    /// Exact angle in degrees.
    pub angle: f64,
    /// Largest allowed deviation from `angle`, inclusive.
    pub orb: f64,
}

/// The major aspects in match order.
pub static ASPECT_TABLE: [AspectDefinition; 5] = [
    AspectDefinition {
        kind: AspectKind::Conjunction,
        angle: 0.0,
        orb: 8.0,
    },
    AspectDefinition {
        kind: AspectKind::Sextile,
        angle: 60.0,
        orb: 6.0,
    },
    AspectDefinition {
        kind: AspectKind::Square,
        angle: 90.0,
        orb: 7.0,
    },
    AspectDefinition {
        kind: AspectKind::Trine,
        angle: 120.0,
        orb: 8.0,
    },
    AspectDefinition {
        kind: AspectKind::Opposition,
        angle: 180.0,
        orb: 8.0,
    },
];

/// Shortest angular distance between two longitudes, `[0, 180]`.
pub fn separation(first: f64, second: f64) -> f64 {
    let diff = (first - second).abs();
    if diff > 180.0 { 360.0 - diff } else { diff }
}

/// Round to two decimals on the exact binary value, ties to even.
fn round_orb(orb: f64) -> f64 {
    Decimal::from_f64_retain(orb)
        .map(|exact| exact.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven))
        .and_then(|rounded| rounded.to_f64())
        .unwrap_or(orb)
}

/// Classify a separation against the aspect table.
///
/// Returns the matching aspect and its orb rounded to two decimals.
pub fn classify(separation: f64) -> Option<(AspectKind, f64)> {
    ASPECT_TABLE.iter().find_map(|definition| {
        let deviation = (separation - definition.angle).abs();
        (deviation <= definition.orb).then(|| (definition.kind, round_orb(deviation)))
    })
}

/// Aspects from each body in `first` to each body in `second`.
///
/// Results follow the loop order: outer over `first`, inner over `second`.
/// With `suppress_self_pairs` set, pairs naming the same body are skipped;
/// set it when both slices come from one snapshot and leave it clear when
/// comparing two moments (a transiting Sun may aspect the natal Sun).
pub fn find_aspects(
    first: &[CelestialBody],
    second: &[CelestialBody],
    suppress_self_pairs: bool,
) -> Vec<Aspect> {
    let mut aspects = Vec::new();
    for a in first {
        for b in second {
            if suppress_self_pairs && a.name == b.name {
                continue;
            }
            if let Some((kind, orb)) = classify(separation(a.abs_pos, b.abs_pos)) {
                aspects.push(Aspect {
                    planet1: a.name,
                    sign1: a.sign.clone(),
                    planet2: b.name,
                    sign2: b.sign.clone(),
                    aspect: kind,
                    orb,
                });
            }
        }
    }
    aspects
}

/// Aspects among the bodies of a single snapshot.
///
/// Every unordered pair appears twice, once in each direction.
pub fn self_aspects(bodies: &[CelestialBody]) -> Vec<Aspect> {
    find_aspects(bodies, bodies, true)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use horoscope_types::Planet;

    use super::*;

    fn body(name: Planet, abs_pos: f64) -> CelestialBody {
        CelestialBody {
            name,
            sign: "Aries".to_owned(),
            position: abs_pos % 30.0,
            abs_pos,
            house: None,
            retrograde: false,
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn separation_takes_short_way_round() {
        assert!(close(separation(350.0, 10.0), 20.0));
        assert!(close(separation(10.0, 350.0), 20.0));
        assert!(close(separation(0.0, 180.0), 180.0));
    }

    #[test]
    fn sun_moon_opposition_has_zero_orb() {
        let aspects = find_aspects(
            &[body(Planet::Sun, 100.0)],
            &[body(Planet::Moon, 280.0)],
            true,
        );
        assert_eq!(aspects.len(), 1);
        assert_eq!(aspects[0].aspect, AspectKind::Opposition);
        assert!(close(aspects[0].orb, 0.0));
    }

    #[test]
    fn orb_boundary_is_inclusive() {
        let hit = find_aspects(&[body(Planet::Sun, 0.0)], &[body(Planet::Mars, 8.0)], true);
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].aspect, AspectKind::Conjunction);
        assert!(close(hit[0].orb, 8.0));

        let miss = find_aspects(&[body(Planet::Sun, 0.0)], &[body(Planet::Mars, 8.01)], true);
        assert!(miss.is_empty());
    }

    #[test]
    fn orb_is_rounded_to_two_decimals() {
        let aspects = find_aspects(
            &[body(Planet::Venus, 10.0)],
            &[body(Planet::Mars, 101.234_567)],
            true,
        );
        assert_eq!(aspects[0].aspect, AspectKind::Square);
        assert!(close(aspects[0].orb, 1.23));

        // Exact binary ties go to the even digit.
        for (offset, expected) in [(0.125, 0.12), (0.375, 0.38), (0.625, 0.62)] {
            let tie = find_aspects(&[body(Planet::Sun, 0.0)], &[body(Planet::Mars, offset)], true);
            assert!(close(tie[0].orb, expected), "offset {offset}: {}", tie[0].orb);
        }
    }

    #[test]
    fn magnitude_is_symmetric() {
        let a = body(Planet::Mercury, 33.3);
        let b = body(Planet::Jupiter, 275.9);
        let forward = find_aspects(&[a.clone()], &[b.clone()], true);
        let backward = find_aspects(&[b], &[a], true);
        assert_eq!(forward.len(), backward.len());
        assert_eq!(forward[0].aspect, backward[0].aspect);
        assert!(close(forward[0].orb, backward[0].orb));
    }

    #[test]
    fn self_pairs_suppressed_only_when_requested() {
        // All ten bodies share a longitude, so every pair is a conjunction.
        let bodies: Vec<CelestialBody> =
            Planet::ALL.into_iter().map(|planet| body(planet, 15.0)).collect();

        let within = self_aspects(&bodies);
        assert_eq!(within.len(), 90);
        assert!(within.iter().all(|a| a.planet1 != a.planet2));
        assert_eq!(within[0].planet1, Planet::Sun);

        let copy = bodies.clone();
        let across = find_aspects(&bodies, &copy, false);
        assert_eq!(across.len(), 100);
        assert_eq!(across.iter().filter(|a| a.planet1 == a.planet2).count(), 10);
    }

    #[test]
    fn gaps_between_orbs_match_nothing() {
        assert_eq!(classify(30.0), None);
        assert_eq!(classify(150.0), None);
        assert_eq!(classify(54.0).map(|(k, _)| k), Some(AspectKind::Sextile));
        assert_eq!(classify(172.0).map(|(k, _)| k), Some(AspectKind::Opposition));
    }
}
