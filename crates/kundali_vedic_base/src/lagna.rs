//! Lagna (ascendant) strategies.
//!
//! [`AscendantMethod::HourAngleProxy`] is the default: it advances the
//! Sun's sidereal longitude by 15° per clock hour since 06:00 local time.
//! This ignores latitude, obliquity and the equation of time, and is kept
//! because house and period outputs are calibrated against it.
//! [`AscendantMethod::Oblique`] solves the true rising degree from local
//! sidereal time, obliquity and latitude (Meeus ch. 14).

use kundali_time::{jd_to_centuries, local_sidereal_time_deg};
use kundali_ephem::true_obliquity_deg;
use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// Ascendant strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AscendantMethod {
    #[default]
    HourAngleProxy,
    Oblique,
}

impl AscendantMethod {
    pub const fn name(self) -> &'static str {
        match self {
            Self::HourAngleProxy => "hour_angle_proxy",
            Self::Oblique => "oblique",
        }
    }
}

/// Everything either strategy may need.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AscendantInputs {
    pub sun_sidereal_deg: f64,
    /// Local clock hour with minutes as a fraction, e.g. 17.1667.
    pub local_clock_hours: f64,
    pub jd_utc: f64,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub ayanamsha_deg: f64,
}

/// `(sun + (hour − 6) × 15) mod 360`.
pub fn hour_angle_proxy_deg(sun_sidereal_deg: f64, local_clock_hours: f64) -> f64 {
    normalize_360(sun_sidereal_deg + (local_clock_hours - 6.0) * 15.0)
}

/// Tropical ecliptic longitude of the eastern horizon, degrees [0, 360).
///
/// `λ = atan2(cos θ, −(sin θ cos ε + tan φ sin ε))` with θ the local
/// sidereal time.
pub fn oblique_ascendant_tropical_deg(jd_utc: f64, latitude_deg: f64, longitude_deg: f64) -> f64 {
    let theta = local_sidereal_time_deg(jd_utc, longitude_deg).to_radians();
    let eps = true_obliquity_deg(jd_to_centuries(jd_utc)).to_radians();
    let phi = latitude_deg.to_radians();
    let asc = theta
        .cos()
        .atan2(-(theta.sin() * eps.cos() + phi.tan() * eps.sin()));
    normalize_360(asc.to_degrees())
}

impl AscendantMethod {
    /// Sidereal ascendant longitude in degrees [0, 360).
    pub fn sidereal_ascendant_deg(self, inputs: &AscendantInputs) -> f64 {
        match self {
            Self::HourAngleProxy => {
                hour_angle_proxy_deg(inputs.sun_sidereal_deg, inputs.local_clock_hours)
            }
            Self::Oblique => normalize_360(
                oblique_ascendant_tropical_deg(
                    inputs.jd_utc,
                    inputs.latitude_deg,
                    inputs.longitude_deg,
                ) - inputs.ayanamsha_deg,
            ),
        }
    }
}
