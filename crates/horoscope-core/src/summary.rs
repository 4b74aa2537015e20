//! Plain-text transit digest.
//!
//! The digest is a handful of lines meant for a downstream text generator:
//! where the Moon and Sun are, what is retrograde, and the five transits
//! most worth mentioning.

use horoscope_types::{Aspect, CelestialBody, MoonPhase, Planet};

/// Maximum number of aspect lines in a digest.
pub const MAX_ASPECT_LINES: usize = 5;

fn aspect_line(aspect: &Aspect) -> String {
    format!(
        "Transiting {} in {} {} natal {} in {} (orb {:.2}°)",
        aspect.planet1, aspect.sign1, aspect.aspect, aspect.planet2, aspect.sign2, aspect.orb
    )
}

/// Rank aspects for the digest.
///
/// Aspects from slow bodies come first, then each group by ascending orb.
/// The sort is stable, so equal keys keep their detection order.
pub fn rank_aspects(aspects: &[Aspect]) -> Vec<&Aspect> {
    let mut ranked: Vec<&Aspect> = aspects.iter().collect();
    ranked.sort_by(|a, b| {
        (!a.planet1.is_slow())
            .cmp(&!b.planet1.is_slow())
            .then_with(|| a.orb.total_cmp(&b.orb))
    });
    ranked
}

/// Build the digest lines for a set of transiting bodies.
///
/// The Moon line is omitted without a Moon, the Sun line without a Sun,
/// and the retrograde line when nothing is retrograde.
pub fn build_transit_summary(
    bodies: &[CelestialBody],
    aspects: &[Aspect],
    phase: Option<MoonPhase>,
    retrogrades: &[Planet],
) -> Vec<String> {
    let find = |planet: Planet| bodies.iter().find(|body| body.name == planet);

    let mut lines = Vec::new();
    if let Some(moon) = find(Planet::Moon) {
        let phase = phase.map_or("", MoonPhase::name);
        lines.push(format!("Moon in {} ({phase})", moon.sign));
    }
    if let Some(sun) = find(Planet::Sun) {
        lines.push(format!("Sun in {}", sun.sign));
    }
    if !retrogrades.is_empty() {
        let names: Vec<&str> = retrogrades.iter().map(|planet| planet.name()).collect();
        lines.push(format!("Retrogrades: {}", names.join(", ")));
    }
    lines.extend(
        rank_aspects(aspects)
            .into_iter()
            .take(MAX_ASPECT_LINES)
            .map(aspect_line),
    );
    lines
}
