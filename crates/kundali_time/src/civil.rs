//! Wall-clock ↔ Julian Date mapping.
//!
//! A birth time is recorded as a local wall clock reading plus a fixed
//! UTC offset in hours. The engine works on UTC Julian Dates; results
//! that humans read (boundary times, sunrise) are mapped back to the
//! same local clock.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::error::TimeError;

/// Julian Date of the Unix epoch, 1970-Jan-01 00:00 UTC.
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Julian Date of a naive timestamp read as UTC.
pub fn naive_to_jd(dt: NaiveDateTime) -> f64 {
    UNIX_EPOCH_JD + dt.and_utc().timestamp_millis() as f64 / MILLIS_PER_DAY
}

/// Naive timestamp (UTC) for a Julian Date, rounded to the millisecond.
pub fn jd_to_naive(jd: f64) -> Result<NaiveDateTime, TimeError> {
    let millis = ((jd - UNIX_EPOCH_JD) * MILLIS_PER_DAY).round();
    if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
        return Err(TimeError::OutOfRange(jd));
    }
    DateTime::from_timestamp_millis(millis as i64)
        .map(|d| d.naive_utc())
        .ok_or(TimeError::OutOfRange(jd))
}

/// UTC Julian Date of a local wall clock reading at a fixed UTC offset.
pub fn local_to_utc_jd(local: NaiveDateTime, utc_offset_hours: f64) -> f64 {
    naive_to_jd(local) - utc_offset_hours / 24.0
}

/// Local wall clock reading of a UTC Julian Date at a fixed UTC offset.
pub fn utc_jd_to_local(jd_utc: f64, utc_offset_hours: f64) -> Result<NaiveDateTime, TimeError> {
    jd_to_naive(jd_utc + utc_offset_hours / 24.0)
}

/// Calendar year with the elapsed fraction of that year, e.g. 1994.51.
///
/// The fraction counts days and clock time from Jan 1 00:00 of the
/// timestamp's own year, so leap years divide by 366.
pub fn decimal_year(dt: NaiveDateTime) -> f64 {
    let year = dt.year();
    let days_in_year = if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
        366.0
    } else {
        365.0
    };
    let day_fraction = dt.num_seconds_from_midnight() as f64 / 86_400.0;
    year as f64 + (dt.ordinal0() as f64 + day_fraction) / days_in_year
}

/// Build a naive timestamp, rejecting dates that do not exist.
pub fn civil_datetime(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
) -> Result<NaiveDateTime, TimeError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .ok_or(TimeError::InvalidDate { year, month, day })
}
