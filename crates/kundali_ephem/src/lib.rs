//! Ephemeris adapter contract and a built-in analytic implementation.
//!
//! The horoscope engine only ever talks to the [`Ephemeris`] trait: a
//! tropical geocentric longitude per body, plus the next sunrise and
//! sunset for a place. [`AnalyticEphemeris`] implements it with
//! closed-form theories so that no kernel files are needed.

pub mod analytic;
pub mod error;
pub mod moon;
pub mod nutation;
pub mod planets;
pub mod precession;
pub mod riseset;
pub mod sun;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use analytic::AnalyticEphemeris;
pub use error::EphemerisError;
pub use nutation::{mean_obliquity_deg, nutation, true_obliquity_deg, Nutation};
pub use precession::{general_precession_longitude_arcsec, general_precession_longitude_deg};

/// Bodies the adapter must be able to place.
///
/// Lunar nodes are computed points, not bodies, and live in the
/// Vedic layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

pub const ALL_BODIES: [Body; 7] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
];

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
        }
    }

    pub const fn all() -> &'static [Body; 7] {
        &ALL_BODIES
    }
}

/// Observer position on the Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive.
    pub longitude_deg: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }
}

/// Source of tropical positions and solar horizon events.
///
/// Implementations must be deterministic and are shared across threads.
/// All instants are UTC Julian Dates.
pub trait Ephemeris: Send + Sync {
    /// Geocentric ecliptic longitude on the true equinox of date, [0, 360).
    fn body_longitude(
        &self,
        body: Body,
        jd_utc: f64,
        location: &GeoLocation,
    ) -> Result<f64, EphemerisError>;

    /// First sunrise at or after `jd_utc`.
    fn next_sunrise(&self, jd_utc: f64, location: &GeoLocation) -> Result<f64, EphemerisError>;

    /// First sunset at or after `jd_utc`.
    fn next_sunset(&self, jd_utc: f64, location: &GeoLocation) -> Result<f64, EphemerisError>;
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn body_longitude(
        &self,
        body: Body,
        jd_utc: f64,
        location: &GeoLocation,
    ) -> Result<f64, EphemerisError> {
        (**self).body_longitude(body, jd_utc, location)
    }

    fn next_sunrise(&self, jd_utc: f64, location: &GeoLocation) -> Result<f64, EphemerisError> {
        (**self).next_sunrise(jd_utc, location)
    }

    fn next_sunset(&self, jd_utc: f64, location: &GeoLocation) -> Result<f64, EphemerisError> {
        (**self).next_sunset(jd_utc, location)
    }
}

impl<E: Ephemeris + ?Sized> Ephemeris for Arc<E> {
    fn body_longitude(
        &self,
        body: Body,
        jd_utc: f64,
        location: &GeoLocation,
    ) -> Result<f64, EphemerisError> {
        (**self).body_longitude(body, jd_utc, location)
    }

    fn next_sunrise(&self, jd_utc: f64, location: &GeoLocation) -> Result<f64, EphemerisError> {
        (**self).next_sunrise(jd_utc, location)
    }

    fn next_sunset(&self, jd_utc: f64, location: &GeoLocation) -> Result<f64, EphemerisError> {
        (**self).next_sunset(jd_utc, location)
    }
}
