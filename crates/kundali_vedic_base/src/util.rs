//! Angle helpers shared by the Vedic modules.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize an angular difference to (-180, 180] degrees.
pub fn normalize_pm180(deg: f64) -> f64 {
    let r = normalize_360(deg);
    if r > 180.0 { r - 360.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert_eq!(normalize_360(0.0), 0.0);
    }

    #[test]
    fn normalize_wraps() {
        assert!((normalize_360(360.0) - 0.0).abs() < 1e-15);
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_tiny_negative_stays_in_range() {
        let r = normalize_360(-1e-18);
        assert!((0.0..360.0).contains(&r), "{r}");
    }

    #[test]
    fn pm180_half_open() {
        assert_eq!(normalize_pm180(180.0), 180.0);
        assert_eq!(normalize_pm180(-180.0), 180.0);
        assert!((normalize_pm180(190.0) + 170.0).abs() < 1e-12);
        assert!((normalize_pm180(-0.5) + 0.5).abs() < 1e-12);
    }
}
