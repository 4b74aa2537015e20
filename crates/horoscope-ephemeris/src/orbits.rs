//! Geocentric ecliptic longitudes of the Sun, Moon, and planets.
//!
//! Planets use the JPL "approximate positions of the planets" Keplerian
//! elements (valid 1800-2050, J2000 mean ecliptic) and are precessed to
//! the ecliptic of date. The Moon uses the leading terms of the Meeus
//! lunar longitude series. Accuracy is on the order of a few arcminutes
//! for the planets and a few hundredths of a degree for the Moon.

use horoscope_types::Planet;

use crate::normalize_degrees;
use crate::time::centuries_since_j2000;

/// General precession in longitude, degrees per Julian century.
const PRECESSION_PER_CENTURY: f64 = 1.396_888;

/// Mean orbital elements at J2000 and their rates per Julian century.
///
/// Each pair is `[value, rate]`. Angles are in degrees, `a` in AU.
struct OrbitalElements {
    a: [f64; 2],
    e: [f64; 2],
    inclination: [f64; 2],
    mean_longitude: [f64; 2],
    perihelion: [f64; 2],
    node: [f64; 2],
}

const MERCURY: OrbitalElements = OrbitalElements {
    a: [0.387_099_27, 0.000_000_37],
    e: [0.205_635_93, 0.000_019_06],
    inclination: [7.004_979_02, -0.005_947_49],
    mean_longitude: [252.250_323_50, 149_472.674_111_75],
    perihelion: [77.457_796_28, 0.160_476_89],
    node: [48.330_765_93, -0.125_340_81],
};

const VENUS: OrbitalElements = OrbitalElements {
    a: [0.723_335_66, 0.000_003_90],
    e: [0.006_776_72, -0.000_041_07],
    inclination: [3.394_676_05, -0.000_788_90],
    mean_longitude: [181.979_099_50, 58_517.815_387_29],
    perihelion: [131.602_467_18, 0.002_683_29],
    node: [76.679_842_55, -0.277_694_18],
};

const EARTH_MOON_BARYCENTER: OrbitalElements = OrbitalElements {
    a: [1.000_002_61, 0.000_005_62],
    e: [0.016_711_23, -0.000_043_92],
    inclination: [-0.000_015_31, -0.012_946_68],
    mean_longitude: [100.464_571_66, 35_999.372_449_81],
    perihelion: [102.937_681_93, 0.323_273_64],
    node: [0.0, 0.0],
};

const MARS: OrbitalElements = OrbitalElements {
    a: [1.523_710_34, 0.000_018_47],
    e: [0.093_394_10, 0.000_078_82],
    inclination: [1.849_691_42, -0.008_131_31],
    mean_longitude: [-4.553_432_05, 19_140.302_684_99],
    perihelion: [-23.943_629_59, 0.444_410_88],
    node: [49.559_538_91, -0.292_573_43],
};

const JUPITER: OrbitalElements = OrbitalElements {
    a: [5.202_887_00, -0.000_116_07],
    e: [0.048_386_24, -0.000_132_53],
    inclination: [1.304_396_95, -0.001_837_14],
    mean_longitude: [34.396_440_51, 3_034.746_127_75],
    perihelion: [14.728_479_83, 0.212_526_68],
    node: [100.473_909_09, 0.204_691_06],
};

const SATURN: OrbitalElements = OrbitalElements {
    a: [9.536_675_94, -0.001_250_60],
    e: [0.053_861_79, -0.000_509_91],
    inclination: [2.485_991_87, 0.001_936_09],
    mean_longitude: [49.954_244_23, 1_222.493_622_01],
    perihelion: [92.598_878_31, -0.418_972_16],
    node: [113.662_424_48, -0.288_677_94],
};

const URANUS: OrbitalElements = OrbitalElements {
    a: [19.189_164_64, -0.001_961_76],
    e: [0.047_257_44, -0.000_043_97],
    inclination: [0.772_637_83, -0.002_429_39],
    mean_longitude: [313.238_104_51, 428.482_027_85],
    perihelion: [170.954_276_30, 0.408_052_81],
    node: [74.016_925_03, 0.042_405_89],
};

const NEPTUNE: OrbitalElements = OrbitalElements {
    a: [30.069_922_76, 0.000_262_91],
    e: [0.008_590_48, 0.000_051_05],
    inclination: [1.770_043_47, 0.000_353_72],
    mean_longitude: [-55.120_029_69, 218.459_453_25],
    perihelion: [44.964_762_27, -0.322_414_64],
    node: [131.784_225_74, -0.005_086_64],
};

const PLUTO: OrbitalElements = OrbitalElements {
    a: [39.482_116_75, -0.000_315_96],
    e: [0.248_827_30, 0.000_051_70],
    inclination: [17.140_012_06, 0.000_048_18],
    mean_longitude: [238.929_038_33, 145.207_805_15],
    perihelion: [224.068_916_29, -0.040_629_42],
    node: [110.303_936_84, -0.011_834_82],
};

/// Heliocentric position projected on the J2000 ecliptic plane (AU).
///
/// Longitude is all the charts need, so the height above the ecliptic is
/// not carried.
#[derive(Debug, Clone, Copy)]
struct EclipticPoint {
    x: f64,
    y: f64,
}

impl OrbitalElements {
    fn at(pair: [f64; 2], t: f64) -> f64 {
        let [value, rate] = pair;
        value + rate * t
    }

    fn heliocentric(&self, t: f64) -> EclipticPoint {
        let a = Self::at(self.a, t);
        let e = Self::at(self.e, t);
        let inclination = Self::at(self.inclination, t).to_radians();
        let mean_longitude = Self::at(self.mean_longitude, t);
        let perihelion = Self::at(self.perihelion, t);
        let node = Self::at(self.node, t);

        let argument_of_perihelion = (perihelion - node).to_radians();
        let mean_anomaly = wrap_signed(mean_longitude - perihelion).to_radians();
        let eccentric_anomaly = solve_kepler(mean_anomaly, e);

        // Position in the orbital plane, x toward perihelion.
        let xp = a * (eccentric_anomaly.cos() - e);
        let yp = a * (1.0 - e * e).sqrt() * eccentric_anomaly.sin();

        let (sin_w, cos_w) = argument_of_perihelion.sin_cos();
        let (sin_n, cos_n) = node.to_radians().sin_cos();
        let cos_i = inclination.cos();

        EclipticPoint {
            x: (cos_w * cos_n - sin_w * sin_n * cos_i) * xp
                + (-sin_w * cos_n - cos_w * sin_n * cos_i) * yp,
            y: (cos_w * sin_n + sin_w * cos_n * cos_i) * xp
                + (-sin_w * sin_n + cos_w * cos_n * cos_i) * yp,
        }
    }
}

/// Solve Kepler's equation `E - e sin E = M` by Newton iteration (radians).
fn solve_kepler(mean_anomaly: f64, e: f64) -> f64 {
    let mut eccentric = mean_anomaly + e * mean_anomaly.sin();
    for _ in 0..30 {
        let delta = (eccentric - e * eccentric.sin() - mean_anomaly) / (1.0 - e * eccentric.cos());
        eccentric -= delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    eccentric
}

/// Wrap an angle into `(-180, 180]` degrees.
fn wrap_signed(degrees: f64) -> f64 {
    let wrapped = normalize_degrees(degrees);
    if wrapped > 180.0 { wrapped - 360.0 } else { wrapped }
}

const fn elements(planet: Planet) -> Option<&'static OrbitalElements> {
    match planet {
        Planet::Mercury => Some(&MERCURY),
        Planet::Venus => Some(&VENUS),
        Planet::Mars => Some(&MARS),
        Planet::Jupiter => Some(&JUPITER),
        Planet::Saturn => Some(&SATURN),
        Planet::Uranus => Some(&URANUS),
        Planet::Neptune => Some(&NEPTUNE),
        Planet::Pluto => Some(&PLUTO),
        Planet::Sun | Planet::Moon => None,
    }
}

/// Geocentric ecliptic longitude of a body at a Julian Day, degrees of date.
pub fn geocentric_longitude(planet: Planet, jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);
    if planet == Planet::Moon {
        return moon_longitude(t);
    }

    let earth = EARTH_MOON_BARYCENTER.heliocentric(t);
    let (dx, dy) = elements(planet).map_or((-earth.x, -earth.y), |orbit| {
        let body = orbit.heliocentric(t);
        (body.x - earth.x, body.y - earth.y)
    });

    normalize_degrees(dy.atan2(dx).to_degrees() + PRECESSION_PER_CENTURY * t)
}

/// Apparent daily motion in longitude, degrees per day (negative when retrograde).
pub fn daily_motion(planet: Planet, jd: f64) -> f64 {
    let before = geocentric_longitude(planet, jd - 0.5);
    let after = geocentric_longitude(planet, jd + 0.5);
    wrap_signed(after - before)
}

/// Leading periodic terms of the lunar longitude: `(coefficient, D, M, M', F)`.
const MOON_TERMS: [(f64, i32, i32, i32, i32); 20] = [
    (6.288_774, 0, 0, 1, 0),
    (1.274_027, 2, 0, -1, 0),
    (0.658_314, 2, 0, 0, 0),
    (0.213_618, 0, 0, 2, 0),
    (-0.185_116, 0, 1, 0, 0),
    (-0.114_332, 0, 0, 0, 2),
    (0.058_793, 2, 0, -2, 0),
    (0.057_066, 2, -1, -1, 0),
    (0.053_322, 2, 0, 1, 0),
    (0.045_758, 2, -1, 0, 0),
    (-0.040_923, 0, 1, -1, 0),
    (-0.034_720, 1, 0, 0, 0),
    (-0.030_383, 0, 1, 1, 0),
    (0.015_327, 2, 0, 0, -2),
    (-0.012_528, 0, 0, 1, 2),
    (0.010_980, 0, 0, 1, -2),
    (0.010_675, 4, 0, -1, 0),
    (0.010_034, 0, 0, 3, 0),
    (0.008_548, 4, 0, -2, 0),
    (-0.007_888, 2, 1, -1, 0),
];

/// Geocentric ecliptic longitude of the Moon, degrees of date.
fn moon_longitude(t: f64) -> f64 {
    let mean_longitude = 218.316_447_7 + 481_267.881_234_21 * t;
    let elongation = (297.850_192_1 + 445_267.111_403_4 * t).to_radians();
    let sun_anomaly = (357.529_109_2 + 35_999.050_290_9 * t).to_radians();
    let moon_anomaly = (134.963_396_4 + 477_198.867_505_5 * t).to_radians();
    let latitude_argument = (93.272_095_0 + 483_202.017_523_3 * t).to_radians();
    // Shrinking eccentricity of Earth's orbit scales the solar-anomaly terms.
    let eccentricity = 1.0 - 0.002_516 * t;

    let perturbation: f64 = MOON_TERMS
        .iter()
        .map(|&(coefficient, d, m, mp, f)| {
            let argument = f64::from(d) * elongation
                + f64::from(m) * sun_anomaly
                + f64::from(mp) * moon_anomaly
                + f64::from(f) * latitude_argument;
            let scale = eccentricity.powi(m.abs());
            coefficient * scale * argument.sin()
        })
        .sum();

    normalize_degrees(mean_longitude + perturbation)
}
