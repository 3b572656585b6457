//! Truncated lunar theory.
//!
//! The fifty largest periodic terms in longitude from ELP-2000/82 as
//! tabulated by Meeus (*Astronomical Algorithms*, ch. 47, table 47.A).
//! Longitude error stays below about 0.01°.

use crate::nutation::nutation;

/// Longitude terms: multiples of D, M, M', F and the sine coefficient
/// in 1e-6 degrees.
#[rustfmt::skip]
static LONGITUDE_TERMS: [(i8, i8, i8, i8, i32); 50] = [
    (0, 0, 1, 0, 6_288_774), (2, 0, -1, 0, 1_274_027), (2, 0, 0, 0, 658_314),
    (0, 0, 2, 0, 213_618), (0, 1, 0, 0, -185_116), (0, 0, 0, 2, -114_332),
    (2, 0, -2, 0, 58_793), (2, -1, -1, 0, 57_066), (2, 0, 1, 0, 53_322),
    (2, -1, 0, 0, 45_758), (0, 1, -1, 0, -40_923), (1, 0, 0, 0, -34_720),
    (0, 1, 1, 0, -30_383), (2, 0, 0, -2, 15_327), (0, 0, 1, 2, -12_528),
    (0, 0, 1, -2, 10_980), (4, 0, -1, 0, 10_675), (0, 0, 3, 0, 10_034),
    (4, 0, -2, 0, 8_548), (2, 1, -1, 0, -7_888), (2, 1, 0, 0, -6_766),
    (1, 0, -1, 0, -5_163), (1, 1, 0, 0, 4_987), (2, -1, 1, 0, 4_036),
    (2, 0, 2, 0, 3_994), (4, 0, 0, 0, 3_861), (2, 0, -3, 0, 3_665),
    (0, 1, -2, 0, -2_689), (2, 0, -1, 2, -2_602), (2, -1, -2, 0, 2_390),
    (1, 0, 1, 0, -2_348), (2, -2, 0, 0, 2_236), (0, 1, 2, 0, -2_120),
    (0, 2, 0, 0, -2_069), (2, -2, -1, 0, 2_048), (2, 0, 1, -2, -1_773),
    (2, 0, 0, 2, -1_595), (4, -1, -1, 0, 1_215), (0, 0, 2, 2, -1_110),
    (3, 0, -1, 0, -892), (2, 1, 1, 0, -810), (4, -1, -2, 0, 759),
    (0, 2, -1, 0, -713), (2, 2, -1, 0, -700), (2, 1, -2, 0, 691),
    (2, -1, 0, -2, 596), (4, 0, 1, 0, 549), (0, 0, 4, 0, 537),
    (4, -1, 0, 0, 520), (1, 0, -2, 0, -487),
];

/// Fundamental lunar arguments in degrees (unreduced).
struct Arguments {
    mean_longitude: f64,
    elongation: f64,
    sun_anomaly: f64,
    moon_anomaly: f64,
    latitude_argument: f64,
}

fn arguments(t: f64) -> Arguments {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    Arguments {
        mean_longitude: 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2
            + t3 / 538_841.0
            - t4 / 65_194_000.0,
        elongation: 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
            - t4 / 113_065_000.0,
        sun_anomaly: 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2
            + t3 / 24_490_000.0,
        moon_anomaly: 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
            - t4 / 14_712_000.0,
        latitude_argument: 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2
            - t3 / 3_526_000.0
            + t4 / 863_310_000.0,
    }
}

/// Geometric longitude on the mean equinox of date, degrees [0, 360).
pub fn geometric_longitude_deg(t: f64) -> f64 {
    let args = arguments(t);
    let d = args.elongation.to_radians();
    let m = args.sun_anomaly.to_radians();
    let mp = args.moon_anomaly.to_radians();
    let f = args.latitude_argument.to_radians();
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;

    let mut sum_l = 0.0;
    for &(cd, cm, cmp, cf, coeff) in &LONGITUDE_TERMS {
        let arg = cd as f64 * d + cm as f64 * m + cmp as f64 * mp + cf as f64 * f;
        let ecc = match cm.abs() {
            1 => e,
            2 => e * e,
            _ => 1.0,
        };
        sum_l += coeff as f64 * ecc * arg.sin();
    }

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    let lp = args.mean_longitude.to_radians();
    sum_l += 3958.0 * a1.sin() + 1962.0 * (lp - f).sin() + 318.0 * a2.sin();

    (args.mean_longitude + sum_l / 1.0e6).rem_euclid(360.0)
}

/// Apparent longitude (true equinox of date), degrees [0, 360).
pub fn apparent_longitude_deg(t: f64) -> f64 {
    (geometric_longitude_deg(t) + nutation(t).delta_psi_deg).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_time::jd_to_centuries;

    // Meeus example 47.a: 1992-Apr-12 0h TD.
    const JD_47A: f64 = 2_448_724.5;

    #[test]
    fn meeus_47a_geometric() {
        let lon = geometric_longitude_deg(jd_to_centuries(JD_47A));
        assert!((lon - 133.162_655).abs() < 0.01, "λ = {lon}");
    }

    #[test]
    fn meeus_47a_apparent() {
        let lon = apparent_longitude_deg(jd_to_centuries(JD_47A));
        assert!((lon - 133.167_265).abs() < 0.01, "λ app = {lon}");
    }

    #[test]
    fn mean_daily_motion() {
        let t0 = jd_to_centuries(2_451_545.0);
        let mut total = 0.0;
        let mut prev = geometric_longitude_deg(t0);
        for day in 1..=27 {
            let lon = geometric_longitude_deg(jd_to_centuries(2_451_545.0 + day as f64));
            total += (lon - prev).rem_euclid(360.0);
            prev = lon;
        }
        let mean = total / 27.0;
        assert!((mean - 13.18).abs() < 0.3, "mean motion {mean}°/day");
    }
}
