//! Error types for Vedic calculations.

use kundali_ephem::EphemerisError;
use kundali_time::TimeError;
use thiserror::Error;

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// A caller-supplied value is out of range.
    #[error("invalid input `{field}`: {reason}")]
    InvalidInput { field: &'static str, reason: String },
    /// Sunrise or sunset does not occur for this place and date.
    #[error("astronomical event unavailable: {0}")]
    AstronomicalEventUnavailable(EphemerisError),
    /// Any other ephemeris failure.
    #[error("ephemeris error: {0}")]
    Ephemeris(EphemerisError),
    /// Attribute table is malformed or an index fell outside it.
    #[error("attribute table error: {0}")]
    DomainTable(String),
    #[error(transparent)]
    Time(#[from] TimeError),
}

impl VedicError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

impl From<EphemerisError> for VedicError {
    fn from(e: EphemerisError) -> Self {
        match e {
            EphemerisError::NoSunriseEvent { .. } | EphemerisError::NoSunsetEvent { .. } => {
                Self::AstronomicalEventUnavailable(e)
            }
            other => Self::Ephemeris(other),
        }
    }
}
