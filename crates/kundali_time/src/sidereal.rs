//! Mean sidereal time.
//!
//! Arguments are UTC Julian Dates standing in for UT1; the sub-second
//! difference is far below the precision the ascendant and rise/set
//! code need.
//!
//! Source: Meeus, *Astronomical Algorithms*, eq. 12.4.

use crate::julian::{jd_to_centuries, J2000_JD};

/// Greenwich mean sidereal time in degrees, [0, 360).
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let t = jd_to_centuries(jd_ut);
    let theta = 280.460_618_37 + 360.985_647_366_29 * (jd_ut - J2000_JD) + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    theta.rem_euclid(360.0)
}

/// Local mean sidereal time in degrees for an east-positive longitude.
pub fn local_sidereal_time_deg(jd_ut: f64, longitude_east_deg: f64) -> f64 {
    (gmst_deg(jd_ut) + longitude_east_deg).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_12a() {
        // 1987-Apr-10 0h UT: 13h10m46.3668s = 197.693195°
        let g = gmst_deg(2_446_895.5);
        assert!((g - 197.693_195).abs() < 1e-4, "GMST = {g}");
    }

    #[test]
    fn meeus_example_12b() {
        // 1987-Apr-10 19:21:00 UT: 128.737873°
        let g = gmst_deg(2_446_896.306_25);
        assert!((g - 128.737_873).abs() < 1e-4, "GMST = {g}");
    }

    #[test]
    fn lst_adds_east_longitude() {
        let jd = 2_451_545.0;
        let lst = local_sidereal_time_deg(jd, 80.9);
        let expected = (gmst_deg(jd) + 80.9).rem_euclid(360.0);
        assert!((lst - expected).abs() < 1e-12);
    }

    #[test]
    fn gmst_range() {
        for &jd in &[2_451_545.0, 2_451_544.5, 2_460_000.5, 2_440_000.5] {
            let g = gmst_deg(jd);
            assert!((0.0..360.0).contains(&g), "GMST out of range: {g}");
        }
    }
}
