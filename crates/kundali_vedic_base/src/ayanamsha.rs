//! Ayanamsha: the offset between the tropical and sidereal zodiacs.
//!
//! Two models are available behind [`AyanamshaModel`]. One model is chosen
//! per engine and used for every longitude, dasha and panchang quantity of
//! a computation, so sign and nakshatra boundaries stay consistent.
//!
//! - [`AyanamshaModel::LahiriPolynomial`]: the Lahiri (Chitrapaksha) value
//!   at J2000.0 advanced by the IAU 2006 general precession polynomial in
//!   Julian centuries.
//! - [`AyanamshaModel::LinearPerYear`]: zero in the year 285 CE, growing
//!   by a constant 50.2388475″ per year.

use kundali_ephem::general_precession_longitude_deg;
use kundali_time::{jd_to_centuries, J2000_JD};
use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// Lahiri ayanamsha at J2000.0, degrees.
pub const LAHIRI_J2000_DEG: f64 = 23.853;

/// Year in which the linear model puts the two zodiacs together.
pub const LINEAR_ZERO_YEAR: f64 = 285.0;

/// Annual precession rate of the linear model, arcseconds per year.
pub const LINEAR_RATE_ARCSEC_PER_YEAR: f64 = 50.238_847_5;

const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

/// Ayanamsha strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AyanamshaModel {
    #[default]
    LahiriPolynomial,
    LinearPerYear,
}

pub const ALL_AYANAMSHA_MODELS: [AyanamshaModel; 2] =
    [AyanamshaModel::LahiriPolynomial, AyanamshaModel::LinearPerYear];

impl AyanamshaModel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::LahiriPolynomial => "lahiri_polynomial",
            Self::LinearPerYear => "linear_per_year",
        }
    }

    pub const fn all() -> &'static [AyanamshaModel; 2] {
        &ALL_AYANAMSHA_MODELS
    }

    /// Ayanamsha in degrees at a UTC Julian Date.
    pub fn ayanamsha_deg(self, jd_utc: f64) -> f64 {
        match self {
            Self::LahiriPolynomial => {
                LAHIRI_J2000_DEG + general_precession_longitude_deg(jd_to_centuries(jd_utc))
            }
            Self::LinearPerYear => {
                (julian_year(jd_utc) - LINEAR_ZERO_YEAR) * LINEAR_RATE_ARCSEC_PER_YEAR / 3600.0
            }
        }
    }

    /// Sidereal longitude for a tropical longitude at `jd_utc`, in [0, 360).
    pub fn to_sidereal(self, tropical_deg: f64, jd_utc: f64) -> f64 {
        normalize_360(tropical_deg - self.ayanamsha_deg(jd_utc))
    }
}

/// Julian epoch year, e.g. 2000.0 at J2000.0.
fn julian_year(jd: f64) -> f64 {
    2000.0 + (jd - J2000_JD) / DAYS_PER_JULIAN_YEAR
}
