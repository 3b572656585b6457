//! Sunrise and sunset by iterated hour angle.
//!
//! The Sun's apparent RA/Dec at an estimated event time gives the hour
//! angle at which its upper limb touches the refracted horizon; the
//! estimate is corrected against local sidereal time until it moves
//! by less than [`CONVERGENCE_DAYS`].

use kundali_time::{jd_to_centuries, local_sidereal_time_deg};

use crate::GeoLocation;
use crate::sun::apparent_ra_dec_deg;

/// Horizon depression for sunrise/sunset: 34′ refraction + 16′ semidiameter.
pub const SUNRISE_DEPRESSION_DEG: f64 = 50.0 / 60.0;

/// Hour angle rate in degrees per solar day.
const SIDEREAL_RATE_DEG: f64 = 360.985_647_366_29;

const MAX_ITERATIONS: usize = 5;
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// Which horizon crossing to solve for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseSetEvent {
    Sunrise,
    Sunset,
}

impl RiseSetEvent {
    fn is_rising(self) -> bool {
        matches!(self, Self::Sunrise)
    }
}

/// Outcome of solving one event around one local noon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetResult {
    /// Event time, UTC Julian Date.
    Event { jd_utc: f64 },
    /// Sun stays below the horizon all day.
    NeverRises,
    /// Sun stays above the horizon all day.
    NeverSets,
}

/// Approximate UTC Julian Date of local mean noon on the civil day whose
/// local mean solar date contains `jd_utc`, shifted by `day_offset` days.
pub fn approximate_local_noon_jd(jd_utc: f64, longitude_deg: f64, day_offset: i32) -> f64 {
    let shift = longitude_deg / 360.0;
    (jd_utc + shift).round() + day_offset as f64 - shift
}

fn wrap_pm180(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r > 180.0 { r - 360.0 } else { r }
}

fn cos_hour_angle(location: &GeoLocation, dec_deg: f64) -> f64 {
    let phi = location.latitude_deg.to_radians();
    let dec = dec_deg.to_radians();
    let h0 = (-SUNRISE_DEPRESSION_DEG).to_radians();
    (h0.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos())
}

/// Solve a rise or set around the given approximate local noon.
pub fn compute_rise_set(location: &GeoLocation, event: RiseSetEvent, jd_utc_noon: f64) -> RiseSetResult {
    let (ra, dec) = apparent_ra_dec_deg(jd_to_centuries(jd_utc_noon));
    let cos_h0 = cos_hour_angle(location, dec);
    if cos_h0 > 1.0 {
        return RiseSetResult::NeverRises;
    }
    if cos_h0 < -1.0 {
        return RiseSetResult::NeverSets;
    }
    let h0 = cos_h0.acos().to_degrees();

    let ha_noon = wrap_pm180(local_sidereal_time_deg(jd_utc_noon, location.longitude_deg) - ra);
    let jd_transit = jd_utc_noon - ha_noon / SIDEREAL_RATE_DEG;
    let mut jd_event = if event.is_rising() {
        jd_transit - h0 / SIDEREAL_RATE_DEG
    } else {
        jd_transit + h0 / SIDEREAL_RATE_DEG
    };

    for _ in 0..MAX_ITERATIONS {
        let (ra_i, dec_i) = apparent_ra_dec_deg(jd_to_centuries(jd_event));
        let cos_hi = cos_hour_angle(location, dec_i);
        if cos_hi > 1.0 {
            return RiseSetResult::NeverRises;
        }
        if cos_hi < -1.0 {
            return RiseSetResult::NeverSets;
        }
        let h_target = cos_hi.acos().to_degrees();
        let ha_target = if event.is_rising() { -h_target } else { h_target };
        let ha_actual = wrap_pm180(local_sidereal_time_deg(jd_event, location.longitude_deg) - ra_i);

        let correction = wrap_pm180(ha_target - ha_actual) / SIDEREAL_RATE_DEG;
        jd_event += correction;
        if correction.abs() < CONVERGENCE_DAYS {
            break;
        }
    }

    RiseSetResult::Event { jd_utc: jd_event }
}

/// First event at or after `jd_utc`, scanning the surrounding local days.
///
/// Returns `None` when no such event exists within the scan, which happens
/// only during polar day or night.
pub fn next_event(location: &GeoLocation, event: RiseSetEvent, jd_utc: f64) -> Option<f64> {
    (-1..=2)
        .map(|k| approximate_local_noon_jd(jd_utc, location.longitude_deg, k))
        .filter_map(|noon| match compute_rise_set(location, event, noon) {
            RiseSetResult::Event { jd_utc: t } => Some(t),
            RiseSetResult::NeverRises | RiseSetResult::NeverSets => None,
        })
        .find(|&t| t >= jd_utc)
}
