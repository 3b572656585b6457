//! Birth moment input and the observer state derived from it.

use chrono::{NaiveDate, NaiveDateTime};
use kundali_ephem::GeoLocation;
use kundali_time::{civil_datetime, decimal_year, local_to_utc_jd};
use serde::Serialize;

use crate::error::VedicError;

/// Widest UTC offset in use, hours.
pub const MAX_UTC_OFFSET_HOURS: f64 = 14.0;

/// Local civil birth time and place. Validated on construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BirthMoment {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    latitude_deg: f64,
    longitude_deg: f64,
    utc_offset_hours: f64,
}

fn check_range(field: &'static str, value: f64, lo: f64, hi: f64) -> Result<(), VedicError> {
    if !value.is_finite() || value < lo || value > hi {
        return Err(VedicError::invalid(
            field,
            format!("{value} is outside [{lo}, {hi}]"),
        ));
    }
    Ok(())
}

impl BirthMoment {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        latitude_deg: f64,
        longitude_deg: f64,
        utc_offset_hours: f64,
    ) -> Result<Self, VedicError> {
        let moment = Self {
            year,
            month,
            day,
            hour,
            minute,
            latitude_deg,
            longitude_deg,
            utc_offset_hours,
        };
        moment.validate()?;
        Ok(moment)
    }

    /// Check every field; the first offending field is named in the error.
    pub fn validate(&self) -> Result<(), VedicError> {
        if !(1..=12).contains(&self.month) {
            return Err(VedicError::invalid(
                "month",
                format!("{} is outside [1, 12]", self.month),
            ));
        }
        if self.day == 0 || NaiveDate::from_ymd_opt(self.year, self.month, self.day).is_none() {
            return Err(VedicError::invalid(
                "day",
                format!(
                    "{} is not a day of {:04}-{:02}",
                    self.day, self.year, self.month
                ),
            ));
        }
        if self.hour > 23 {
            return Err(VedicError::invalid(
                "hour",
                format!("{} is outside [0, 23]", self.hour),
            ));
        }
        if self.minute > 59 {
            return Err(VedicError::invalid(
                "minute",
                format!("{} is outside [0, 59]", self.minute),
            ));
        }
        check_range("latitude", self.latitude_deg, -90.0, 90.0)?;
        check_range("longitude", self.longitude_deg, -180.0, 180.0)?;
        check_range(
            "utc_offset",
            self.utc_offset_hours,
            -MAX_UTC_OFFSET_HOURS,
            MAX_UTC_OFFSET_HOURS,
        )?;
        Ok(())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    pub fn utc_offset_hours(&self) -> f64 {
        self.utc_offset_hours
    }

    pub fn location(&self) -> GeoLocation {
        GeoLocation::new(self.latitude_deg, self.longitude_deg)
    }

    /// Local wall clock reading of the birth.
    pub fn local_datetime(&self) -> Result<NaiveDateTime, VedicError> {
        Ok(civil_datetime(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
        )?)
    }

    /// Local clock hour with minutes as a fraction.
    pub fn local_clock_hours(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0
    }

    /// Derive the transient observer state used by ephemeris queries.
    pub fn observer(&self) -> Result<ObserverState, VedicError> {
        self.validate()?;
        let local = self.local_datetime()?;
        Ok(ObserverState {
            jd_utc: local_to_utc_jd(local, self.utc_offset_hours),
            local,
            location: self.location(),
            utc_offset_hours: self.utc_offset_hours,
            local_clock_hours: self.local_clock_hours(),
            birth_year_fraction: decimal_year(local),
        })
    }
}

/// UTC instant and place of a birth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverState {
    /// UTC instant: local time minus the UTC offset.
    pub jd_utc: f64,
    pub local: NaiveDateTime,
    pub location: GeoLocation,
    pub utc_offset_hours: f64,
    pub local_clock_hours: f64,
    /// Local birth date as a decimal calendar year.
    pub birth_year_fraction: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lucknow() -> BirthMoment {
        BirthMoment::new(1994, 7, 7, 17, 10, 26.8, 80.9, 5.5).unwrap()
    }

    fn field_of(err: VedicError) -> &'static str {
        match err {
            VedicError::InvalidInput { field, .. } => field,
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn observer_utc_instant() {
        let obs = lucknow().observer().unwrap();
        // 1994-07-07 11:40 UTC
        let expected = 2_449_540.5 + (11.0 + 40.0 / 60.0) / 24.0;
        assert!((obs.jd_utc - expected).abs() < 1e-8, "{}", obs.jd_utc);
        assert!((obs.local_clock_hours - (17.0 + 10.0 / 60.0)).abs() < 1e-12);
        assert!((obs.birth_year_fraction - 1994.514).abs() < 0.001);
    }

    #[test]
    fn rejects_each_field() {
        let cases = [
            (BirthMoment::new(1994, 13, 7, 17, 10, 26.8, 80.9, 5.5), "month"),
            (BirthMoment::new(1994, 0, 7, 17, 10, 26.8, 80.9, 5.5), "month"),
            (BirthMoment::new(1994, 2, 29, 17, 10, 26.8, 80.9, 5.5), "day"),
            (BirthMoment::new(1994, 7, 0, 17, 10, 26.8, 80.9, 5.5), "day"),
            (BirthMoment::new(1994, 7, 7, 24, 10, 26.8, 80.9, 5.5), "hour"),
            (BirthMoment::new(1994, 7, 7, 17, 60, 26.8, 80.9, 5.5), "minute"),
            (BirthMoment::new(1994, 7, 7, 17, 10, 90.5, 80.9, 5.5), "latitude"),
            (BirthMoment::new(1994, 7, 7, 17, 10, 26.8, -180.1, 5.5), "longitude"),
            (BirthMoment::new(1994, 7, 7, 17, 10, 26.8, 80.9, 15.0), "utc_offset"),
            (BirthMoment::new(1994, 7, 7, 17, 10, f64::NAN, 80.9, 5.5), "latitude"),
        ];
        for (result, field) in cases {
            assert_eq!(field_of(result.unwrap_err()), field);
        }
    }

    #[test]
    fn leap_day_accepted() {
        assert!(BirthMoment::new(2000, 2, 29, 0, 0, 0.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn boundary_values_accepted() {
        assert!(BirthMoment::new(1994, 12, 31, 23, 59, 90.0, -180.0, -14.0).is_ok());
        assert!(BirthMoment::new(1994, 1, 1, 0, 0, -90.0, 180.0, 14.0).is_ok());
    }
}
