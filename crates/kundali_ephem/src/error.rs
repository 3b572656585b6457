//! Ephemeris adapter errors.

use thiserror::Error;

/// Failures an [`crate::Ephemeris`] implementation may report.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The Sun does not rise in the searched window (polar night or day).
    #[error("no sunrise at latitude {latitude_deg}° near JD {jd_utc}")]
    NoSunriseEvent { jd_utc: f64, latitude_deg: f64 },
    /// The Sun does not set in the searched window (polar day or night).
    #[error("no sunset at latitude {latitude_deg}° near JD {jd_utc}")]
    NoSunsetEvent { jd_utc: f64, latitude_deg: f64 },
    /// Query arguments the adapter cannot evaluate.
    #[error("invalid ephemeris query: {0}")]
    InvalidQuery(&'static str),
}
