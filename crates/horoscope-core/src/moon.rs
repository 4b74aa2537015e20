//! Lunar phase classification.

use horoscope_types::{CelestialBody, MoonPhase, Planet};

/// Inclusive lower edge of each band after the first New Moon band.
const BAND_STARTS: [(f64, MoonPhase); 8] = [
    (22.5, MoonPhase::WaxingCrescent),
    (67.5, MoonPhase::FirstQuarter),
    (112.5, MoonPhase::WaxingGibbous),
    (157.5, MoonPhase::FullMoon),
    (202.5, MoonPhase::WaningGibbous),
    (247.5, MoonPhase::LastQuarter),
    (292.5, MoonPhase::WaningCrescent),
    (337.5, MoonPhase::NewMoon),
];

/// Classify the Moon's elongation from the Sun.
///
/// The elongation `(moon - sun) mod 360` is split into eight 45-degree
/// bands centred on 0, 45, 90, ... Lower band edges are inclusive, so 22.5
/// is already a Waxing Crescent.
pub fn moon_phase(sun_abs_pos: f64, moon_abs_pos: f64) -> MoonPhase {
    let elongation = (moon_abs_pos - sun_abs_pos).rem_euclid(360.0);
    BAND_STARTS
        .iter()
        .rev()
        .find(|&&(start, _)| elongation >= start)
        .map_or(MoonPhase::NewMoon, |&(_, phase)| phase)
}

/// The phase for a set of bodies, or `None` without both Sun and Moon.
pub fn moon_phase_of(bodies: &[CelestialBody]) -> Option<MoonPhase> {
    let longitude = |planet: Planet| {
        bodies
            .iter()
            .find(|body| body.name == planet)
            .map(|body| body.abs_pos)
    };
    Some(moon_phase(longitude(Planet::Sun)?, longitude(Planet::Moon)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges_are_half_open() {
        let cases = [
            (0.0, MoonPhase::NewMoon),
            (22.499, MoonPhase::NewMoon),
            (22.5, MoonPhase::WaxingCrescent),
            (67.5, MoonPhase::FirstQuarter),
            (112.5, MoonPhase::WaxingGibbous),
            (157.5, MoonPhase::FullMoon),
            (180.0, MoonPhase::FullMoon),
            (202.5, MoonPhase::WaningGibbous),
            (247.5, MoonPhase::LastQuarter),
            (292.5, MoonPhase::WaningCrescent),
            (337.499, MoonPhase::WaningCrescent),
            (337.5, MoonPhase::NewMoon),
            (359.999, MoonPhase::NewMoon),
        ];
        for (elongation, expected) in cases {
            assert_eq!(moon_phase(0.0, elongation), expected, "elongation {elongation}");
        }
    }

    #[test]
    fn adjacent_floats_straddle_each_edge() {
        let edges: [(f64, MoonPhase, MoonPhase); 8] = [
            (22.5, MoonPhase::NewMoon, MoonPhase::WaxingCrescent),
            (67.5, MoonPhase::WaxingCrescent, MoonPhase::FirstQuarter),
            (112.5, MoonPhase::FirstQuarter, MoonPhase::WaxingGibbous),
            (157.5, MoonPhase::WaxingGibbous, MoonPhase::FullMoon),
            (202.5, MoonPhase::FullMoon, MoonPhase::WaningGibbous),
            (247.5, MoonPhase::WaningGibbous, MoonPhase::LastQuarter),
            (292.5, MoonPhase::LastQuarter, MoonPhase::WaningCrescent),
            (337.5, MoonPhase::WaningCrescent, MoonPhase::NewMoon),
        ];
        for (edge, below, at) in edges {
            let just_below = f64::from_bits(edge.to_bits().wrapping_sub(1));
            assert_eq!(moon_phase(0.0, just_below), below, "elongation {just_below}");
            assert_eq!(moon_phase(0.0, edge), at, "elongation {edge}");
        }
    }

    #[test]
    fn elongation_wraps_through_zero() {
        // Moon 20 degrees behind the Sun across Aries 0.
        assert_eq!(moon_phase(10.0, 350.0), MoonPhase::NewMoon);
        assert_eq!(moon_phase(300.0, 30.0), MoonPhase::FirstQuarter);
        assert_eq!(moon_phase(100.0, 280.0), MoonPhase::FullMoon);
    }

    #[test]
    fn classification_is_total() {
        let mut elongation = -720.0;
        while elongation < 720.0 {
            let phase = moon_phase(0.0, elongation);
            assert!(MoonPhase::ALL.contains(&phase));
            elongation += 0.25;
        }
    }

    #[test]
    fn phase_requires_sun_and_moon() {
        let sun = CelestialBody {
            name: Planet::Sun,
            sign: "Aries".to_owned(),
            position: 5.0,
            abs_pos: 5.0,
            house: None,
            retrograde: false,
        };
        let moon = CelestialBody {
            name: Planet::Moon,
            abs_pos: 100.0,
            ..sun.clone()
        };
        assert_eq!(moon_phase_of(&[sun.clone()]), None);
        assert_eq!(moon_phase_of(&[moon.clone()]), None);
        assert_eq!(moon_phase_of(&[moon, sun]), Some(MoonPhase::FirstQuarter));
    }
}
