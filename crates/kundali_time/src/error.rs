//! Error types for time conversions.

use thiserror::Error;

/// Errors from calendar and Julian Date conversion.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Year/month/day do not name a real Gregorian date.
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Julian Date cannot be represented as a civil timestamp.
    #[error("julian date {0} is outside the representable civil range")]
    OutOfRange(f64),
}
