//! Mean lunar nodes (Rahu and Ketu).
//!
//! Mean longitude of the Moon's ascending node on the mean equinox of
//! date. Source: Meeus, *Astronomical Algorithms*, eq. 47.7.

use crate::util::normalize_360;

/// Mean Rahu (ascending node) tropical longitude in degrees, [0, 360).
///
/// `t` = Julian centuries since J2000.0.
pub fn mean_rahu_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    normalize_360(
        125.044_547_9 - 1934.136_289_1 * t + 0.002_075_4 * t2 + t3 / 467_441.0
            - t4 / 60_616_000.0,
    )
}

/// Mean Ketu: Rahu + 180°.
pub fn mean_ketu_deg(t: f64) -> f64 {
    normalize_360(mean_rahu_deg(t) + 180.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rahu_at_j2000() {
        assert!((mean_rahu_deg(0.0) - 125.044_547_9).abs() < 1e-9);
    }

    #[test]
    fn ketu_opposite() {
        for &t in &[-1.0, -0.05, 0.0, 0.3] {
            let d = normalize_360(mean_ketu_deg(t) - mean_rahu_deg(t));
            assert!((d - 180.0).abs() < 1e-9, "t={t}: {d}");
        }
    }

    #[test]
    fn nodes_regress() {
        // about 19.3° per year westward
        let a = mean_rahu_deg(0.0);
        let b = mean_rahu_deg(0.01);
        let d = normalize_360(a - b);
        assert!((d - 19.34).abs() < 0.05, "regression {d}°/yr");
    }

    #[test]
    fn meeus_example_47a_node() {
        // 1992-Apr-12 0h TD, Ω = 274.400656°
        let t = -0.077_221_081_451;
        assert!((mean_rahu_deg(t) - 274.400_656).abs() < 1e-4);
    }
}
