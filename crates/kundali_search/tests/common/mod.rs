//! Deterministic ephemerides for integration tests.
#![allow(dead_code)]

use kundali_ephem::{Body, Ephemeris, EphemerisError, GeoLocation};
use kundali_vedic_base::{AyanamshaModel, BirthMoment};

/// Reference epoch of the linear model (J2000.0).
pub const EPOCH_JD: f64 = 2_451_545.0;

/// Sunrise at 00:30 UT, sunset at 13:00 UT, every day.
pub const SUNRISE_UT_DAYS: f64 = 0.5 / 24.0;
pub const SUNSET_UT_DAYS: f64 = 13.0 / 24.0;

/// Uniform circular motion for every body. At the epoch the Moon is
/// exactly 180° from the Sun, so tithi 15 ends at `EPOCH_JD`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearEphemeris;

impl LinearEphemeris {
    pub const fn elements(body: Body) -> (f64, f64) {
        match body {
            Body::Sun => (280.0, 0.9856),
            Body::Moon => (100.0, 13.1764),
            Body::Mercury => (250.0, 1.2),
            Body::Venus => (30.0, 1.1),
            Body::Mars => (150.0, 0.5),
            Body::Jupiter => (200.0, 0.08),
            Body::Saturn => (320.0, -0.03),
        }
    }

    pub fn tropical(body: Body, jd_utc: f64) -> f64 {
        let (l0, rate) = Self::elements(body);
        (l0 + rate * (jd_utc - EPOCH_JD)).rem_euclid(360.0)
    }
}

fn next_daily(jd_utc: f64, ut_offset_days: f64) -> f64 {
    let midnight = (jd_utc - 0.5).floor() + 0.5;
    let t = midnight + ut_offset_days;
    if t < jd_utc { t + 1.0 } else { t }
}

impl Ephemeris for LinearEphemeris {
    fn body_longitude(
        &self,
        body: Body,
        jd_utc: f64,
        _location: &GeoLocation,
    ) -> Result<f64, EphemerisError> {
        Ok(Self::tropical(body, jd_utc))
    }

    fn next_sunrise(&self, jd_utc: f64, _location: &GeoLocation) -> Result<f64, EphemerisError> {
        Ok(next_daily(jd_utc, SUNRISE_UT_DAYS))
    }

    fn next_sunset(&self, jd_utc: f64, _location: &GeoLocation) -> Result<f64, EphemerisError> {
        Ok(next_daily(jd_utc, SUNSET_UT_DAYS))
    }
}

/// Linear positions, but the Sun never rises.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolarNightEphemeris;

impl Ephemeris for PolarNightEphemeris {
    fn body_longitude(
        &self,
        body: Body,
        jd_utc: f64,
        _location: &GeoLocation,
    ) -> Result<f64, EphemerisError> {
        Ok(LinearEphemeris::tropical(body, jd_utc))
    }

    fn next_sunrise(&self, jd_utc: f64, location: &GeoLocation) -> Result<f64, EphemerisError> {
        Err(EphemerisError::NoSunriseEvent {
            jd_utc,
            latitude_deg: location.latitude_deg,
        })
    }

    fn next_sunset(&self, jd_utc: f64, location: &GeoLocation) -> Result<f64, EphemerisError> {
        Err(EphemerisError::NoSunsetEvent {
            jd_utc,
            latitude_deg: location.latitude_deg,
        })
    }
}

/// Lahiri sidereal motion straddling 0° Mesha at the epoch: Mercury direct
/// from 359.5° at +1.2°/day, Mars retrograde from 0.2° at -0.5°/day.
/// Other bodies follow the linear model.
#[derive(Debug, Clone, Copy, Default)]
pub struct AriesCrossingEphemeris;

impl AriesCrossingEphemeris {
    pub fn sidereal(body: Body, jd_utc: f64) -> Option<f64> {
        let days = jd_utc - EPOCH_JD;
        match body {
            Body::Mercury => Some((359.5 + 1.2 * days).rem_euclid(360.0)),
            Body::Mars => Some((0.2 - 0.5 * days).rem_euclid(360.0)),
            _ => None,
        }
    }
}

impl Ephemeris for AriesCrossingEphemeris {
    fn body_longitude(
        &self,
        body: Body,
        jd_utc: f64,
        _location: &GeoLocation,
    ) -> Result<f64, EphemerisError> {
        Ok(match Self::sidereal(body, jd_utc) {
            Some(sidereal) => {
                (sidereal + AyanamshaModel::LahiriPolynomial.ayanamsha_deg(jd_utc))
                    .rem_euclid(360.0)
            }
            None => LinearEphemeris::tropical(body, jd_utc),
        })
    }

    fn next_sunrise(&self, jd_utc: f64, _location: &GeoLocation) -> Result<f64, EphemerisError> {
        Ok(next_daily(jd_utc, SUNRISE_UT_DAYS))
    }

    fn next_sunset(&self, jd_utc: f64, _location: &GeoLocation) -> Result<f64, EphemerisError> {
        Ok(next_daily(jd_utc, SUNSET_UT_DAYS))
    }
}

/// 2000-01-01 12:00 at UTC+5:30, i.e. 06:30 UT, 0.2292 days before the epoch.
pub fn epoch_birth() -> BirthMoment {
    BirthMoment::new(2000, 1, 1, 12, 0, 26.8, 80.9, 5.5).unwrap()
}

/// 1994-07-07 17:10 IST at Lucknow.
pub fn lucknow_1994() -> BirthMoment {
    BirthMoment::new(1994, 7, 7, 17, 10, 26.8, 80.9, 5.5).unwrap()
}
