//! Built-in analytic ephemeris.

use kundali_time::jd_to_centuries;

use crate::error::EphemerisError;
use crate::riseset::{RiseSetEvent, next_event};
use crate::{Body, Ephemeris, GeoLocation, moon, planets, sun};

/// Closed-form ephemeris needing no kernel files.
///
/// Sun and Moon come from truncated analytic theories, the planets from
/// Keplerian mean elements. Positions are geocentric; the observer
/// location only matters for rise/set. UTC is used in place of TT.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyticEphemeris;

impl AnalyticEphemeris {
    pub fn new() -> Self {
        Self
    }
}

fn check_instant(jd_utc: f64) -> Result<f64, EphemerisError> {
    if jd_utc.is_finite() {
        Ok(jd_utc)
    } else {
        Err(EphemerisError::InvalidQuery("julian date must be finite"))
    }
}

impl Ephemeris for AnalyticEphemeris {
    fn body_longitude(
        &self,
        body: Body,
        jd_utc: f64,
        _location: &GeoLocation,
    ) -> Result<f64, EphemerisError> {
        let t = jd_to_centuries(check_instant(jd_utc)?);
        let lon = match body {
            Body::Sun => sun::apparent_longitude_deg(t),
            Body::Moon => moon::apparent_longitude_deg(t),
            Body::Mercury => planets::apparent_longitude_deg(&planets::MERCURY, t),
            Body::Venus => planets::apparent_longitude_deg(&planets::VENUS, t),
            Body::Mars => planets::apparent_longitude_deg(&planets::MARS, t),
            Body::Jupiter => planets::apparent_longitude_deg(&planets::JUPITER, t),
            Body::Saturn => planets::apparent_longitude_deg(&planets::SATURN, t),
        };
        Ok(lon)
    }

    fn next_sunrise(&self, jd_utc: f64, location: &GeoLocation) -> Result<f64, EphemerisError> {
        let jd = check_instant(jd_utc)?;
        next_event(location, RiseSetEvent::Sunrise, jd).ok_or(EphemerisError::NoSunriseEvent {
            jd_utc: jd,
            latitude_deg: location.latitude_deg,
        })
    }

    fn next_sunset(&self, jd_utc: f64, location: &GeoLocation) -> Result<f64, EphemerisError> {
        let jd = check_instant(jd_utc)?;
        next_event(location, RiseSetEvent::Sunset, jd).ok_or(EphemerisError::NoSunsetEvent {
            jd_utc: jd,
            latitude_deg: location.latitude_deg,
        })
    }
}
