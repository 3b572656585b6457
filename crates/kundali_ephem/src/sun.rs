//! Low-precision solar theory.
//!
//! Accuracy about 0.01° in longitude over several centuries around
//! J2000. Source: Meeus, *Astronomical Algorithms*, ch. 25.

use crate::nutation::{nutation, true_obliquity_deg};

/// Annual aberration constant at 1 AU, degrees.
const ABERRATION_DEG: f64 = 20.4898 / 3600.0;

/// Geometric longitude (mean equinox of date) and radius vector in AU.
pub fn geometric_longitude_and_distance(t: f64) -> (f64, f64) {
    let l0 = 280.46646 + 36_000.76983 * t + 0.000_303_2 * t * t;
    let m = (357.52911 + 35_999.05029 * t - 0.000_153_7 * t * t).to_radians();
    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t * t;

    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();

    let true_lon = (l0 + c).rem_euclid(360.0);
    let nu = m + c.to_radians();
    let r = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * nu.cos());
    (true_lon, r)
}

/// Apparent geocentric longitude (true equinox of date), degrees [0, 360).
pub fn apparent_longitude_deg(t: f64) -> f64 {
    let (lon, r) = geometric_longitude_and_distance(t);
    (lon + nutation(t).delta_psi_deg - ABERRATION_DEG / r).rem_euclid(360.0)
}

/// Apparent right ascension and declination, both in degrees.
pub fn apparent_ra_dec_deg(t: f64) -> (f64, f64) {
    let lambda = apparent_longitude_deg(t).to_radians();
    let eps = true_obliquity_deg(t).to_radians();
    let ra = (eps.cos() * lambda.sin()).atan2(lambda.cos());
    let dec = (eps.sin() * lambda.sin()).asin();
    (ra.to_degrees().rem_euclid(360.0), dec.to_degrees())
}
