//! Error type for the orchestration layer.

use kundali_ephem::EphemerisError;
use kundali_time::TimeError;
use kundali_vedic_base::VedicError;
use thiserror::Error;

/// Errors from chart, panchang and dasha orchestration.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    #[error(transparent)]
    Vedic(#[from] VedicError),
    /// Engine configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    /// Configuration text could not be parsed.
    #[error("configuration parse error: {0}")]
    ConfigParse(String),
    #[error("i/o error: {0}")]
    Io(String),
}

impl From<EphemerisError> for SearchError {
    fn from(e: EphemerisError) -> Self {
        Self::Vedic(VedicError::from(e))
    }
}

impl From<TimeError> for SearchError {
    fn from(e: TimeError) -> Self {
        Self::Vedic(VedicError::from(e))
    }
}
