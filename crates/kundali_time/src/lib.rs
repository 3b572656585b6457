//! Civil time, Julian Dates and sidereal time for horoscope computation.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions
//! - Local wall clock ↔ UTC Julian Date mapping (fixed UTC offset)
//! - Decimal years for period arithmetic
//! - Greenwich and local mean sidereal time
//!
//! UT1 is taken equal to UTC and ΔT is ignored throughout; the consumers
//! of this crate work at arc-minute precision.

pub mod civil;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use civil::{
    civil_datetime, decimal_year, jd_to_naive, local_to_utc_jd, naive_to_jd, utc_jd_to_local,
};
pub use error::TimeError;
pub use julian::{
    calendar_to_jd, jd_to_calendar, jd_to_centuries, DAYS_PER_CENTURY, J2000_JD,
    MINUTES_PER_DAY,
};
pub use sidereal::{gmst_deg, local_sidereal_time_deg};
