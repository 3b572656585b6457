//! Planetary positions from Keplerian mean elements.
//!
//! Elements and rates are the JPL "approximate positions" set valid
//! 1800–2050 (Standish), referred to the J2000 ecliptic and equinox.
//! Geocentric positions subtract the Earth–Moon barycentre, apply one
//! light-time iteration, then precess to the equinox of date.

use std::f64::consts::TAU;

use crate::nutation::nutation;
use crate::precession::general_precession_longitude_deg;

/// Light travel time for 1 AU, in days.
const LIGHT_DAYS_PER_AU: f64 = 0.005_775_518_3;

const KEPLER_TOLERANCE_RAD: f64 = 1.0e-12;
const KEPLER_MAX_ITERATIONS: usize = 20;

/// Orbital elements at J2000 with rates per Julian century.
///
/// Angles in degrees, semi-major axis in AU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerElements {
    pub a: [f64; 2],
    pub e: [f64; 2],
    pub inclination: [f64; 2],
    pub mean_longitude: [f64; 2],
    pub perihelion_longitude: [f64; 2],
    pub node_longitude: [f64; 2],
}

#[rustfmt::skip]
pub const MERCURY: KeplerElements = KeplerElements {
    a: [0.387_099_27, 0.000_000_37],
    e: [0.205_635_93, 0.000_019_06],
    inclination: [7.004_979_02, -0.005_947_49],
    mean_longitude: [252.250_323_50, 149_472.674_111_75],
    perihelion_longitude: [77.457_796_28, 0.160_476_89],
    node_longitude: [48.330_765_93, -0.125_340_81],
};

#[rustfmt::skip]
pub const VENUS: KeplerElements = KeplerElements {
    a: [0.723_335_66, 0.000_003_90],
    e: [0.006_776_72, -0.000_041_07],
    inclination: [3.394_676_05, -0.000_788_90],
    mean_longitude: [181.979_099_50, 58_517.815_387_29],
    perihelion_longitude: [131.602_467_18, 0.002_683_29],
    node_longitude: [76.679_842_55, -0.277_694_18],
};

#[rustfmt::skip]
pub const EARTH_MOON_BARYCENTER: KeplerElements = KeplerElements {
    a: [1.000_002_61, 0.000_005_62],
    e: [0.016_711_23, -0.000_043_92],
    inclination: [-0.000_015_31, -0.012_946_68],
    mean_longitude: [100.464_571_66, 35_999.372_449_81],
    perihelion_longitude: [102.937_681_93, 0.323_273_64],
    node_longitude: [0.0, 0.0],
};

#[rustfmt::skip]
pub const MARS: KeplerElements = KeplerElements {
    a: [1.523_710_34, 0.000_018_47],
    e: [0.093_394_10, 0.000_078_82],
    inclination: [1.849_691_42, -0.008_131_31],
    mean_longitude: [-4.553_432_05, 19_140.302_684_99],
    perihelion_longitude: [-23.943_629_59, 0.444_410_88],
    node_longitude: [49.559_538_91, -0.292_573_43],
};

#[rustfmt::skip]
pub const JUPITER: KeplerElements = KeplerElements {
    a: [5.202_887_00, -0.000_116_07],
    e: [0.048_386_24, -0.000_132_53],
    inclination: [1.304_396_95, -0.001_837_14],
    mean_longitude: [34.396_440_51, 3_034.746_127_75],
    perihelion_longitude: [14.728_479_83, 0.212_526_68],
    node_longitude: [100.473_909_09, 0.204_691_06],
};

#[rustfmt::skip]
pub const SATURN: KeplerElements = KeplerElements {
    a: [9.536_675_94, -0.001_250_60],
    e: [0.053_861_79, -0.000_509_91],
    inclination: [2.485_991_87, 0.001_936_09],
    mean_longitude: [49.954_244_23, 1_222.493_622_01],
    perihelion_longitude: [92.598_878_31, -0.418_972_16],
    node_longitude: [113.662_424_48, -0.288_677_94],
};

/// Solve Kepler's equation `E - e sin E = M` by Newton iteration.
pub fn solve_kepler(mean_anomaly_rad: f64, e: f64) -> f64 {
    let m = mean_anomaly_rad;
    let mut ecc_anomaly = if e < 0.8 { m } else { std::f64::consts::PI };
    for _ in 0..KEPLER_MAX_ITERATIONS {
        let delta = (ecc_anomaly - e * ecc_anomaly.sin() - m) / (1.0 - e * ecc_anomaly.cos());
        ecc_anomaly -= delta;
        if delta.abs() < KEPLER_TOLERANCE_RAD {
            break;
        }
    }
    ecc_anomaly
}

impl KeplerElements {
    /// Heliocentric ecliptic J2000 position in AU.
    pub fn heliocentric_position(&self, t: f64) -> [f64; 3] {
        let at = |pair: [f64; 2]| pair[0] + pair[1] * t;
        let a = at(self.a);
        let e = at(self.e);
        let inc = at(self.inclination).to_radians();
        let node = at(self.node_longitude).to_radians();
        let peri = at(self.perihelion_longitude).to_radians();
        let mean_lon = at(self.mean_longitude).to_radians();

        let arg_peri = peri - node;
        let mean_anomaly = (mean_lon - peri).rem_euclid(TAU);
        let ecc_anomaly = solve_kepler(mean_anomaly, e);

        let xp = a * (ecc_anomaly.cos() - e);
        let yp = a * (1.0 - e * e).sqrt() * ecc_anomaly.sin();

        let (sw, cw) = arg_peri.sin_cos();
        let (so, co) = node.sin_cos();
        let (si, ci) = inc.sin_cos();

        [
            (cw * co - sw * so * ci) * xp + (-sw * co - cw * so * ci) * yp,
            (cw * so + sw * co * ci) * xp + (-sw * so + cw * co * ci) * yp,
            (sw * si) * xp + (cw * si) * yp,
        ]
    }
}

/// Apparent geocentric ecliptic longitude of a planet, true equinox of
/// date, degrees [0, 360). Annual aberration is neglected.
pub fn apparent_longitude_deg(elements: &KeplerElements, t: f64) -> f64 {
    let earth = EARTH_MOON_BARYCENTER.heliocentric_position(t);

    let geocentric = |t_emit: f64| {
        let p = elements.heliocentric_position(t_emit);
        [p[0] - earth[0], p[1] - earth[1], p[2] - earth[2]]
    };

    let first = geocentric(t);
    let distance = (first[0] * first[0] + first[1] * first[1] + first[2] * first[2]).sqrt();
    let light_time_centuries = distance * LIGHT_DAYS_PER_AU / 36_525.0;
    let v = geocentric(t - light_time_centuries);

    let lon_j2000 = v[1].atan2(v[0]).to_degrees();
    (lon_j2000 + general_precession_longitude_deg(t) + nutation(t).delta_psi_deg).rem_euclid(360.0)
}
