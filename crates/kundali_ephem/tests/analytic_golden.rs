//! Golden checks for the analytic ephemeris against published values.

use kundali_ephem::{AnalyticEphemeris, Body, Ephemeris, GeoLocation};
use kundali_time::{calendar_to_jd, utc_jd_to_local};
use chrono::Timelike;

fn eph() -> AnalyticEphemeris {
    AnalyticEphemeris::new()
}

fn lucknow() -> GeoLocation {
    GeoLocation::new(26.8, 80.9)
}

fn daily_motion(body: Body, jd: f64) -> f64 {
    let loc = GeoLocation::new(0.0, 0.0);
    let a = eph().body_longitude(body, jd, &loc).unwrap();
    let b = eph().body_longitude(body, jd + 1.0, &loc).unwrap();
    let d = (b - a).rem_euclid(360.0);
    if d > 180.0 { d - 360.0 } else { d }
}

#[test]
fn sun_at_j2000() {
    let lon = eph()
        .body_longitude(Body::Sun, 2_451_545.0, &lucknow())
        .unwrap();
    assert!((lon - 280.37).abs() < 0.01, "Sun λ = {lon}");
}

#[test]
fn venus_meeus_33a() {
    let lon = eph()
        .body_longitude(Body::Venus, 2_448_976.5, &lucknow())
        .unwrap();
    assert!((lon - 313.081).abs() < 0.1, "Venus λ = {lon}");
}

#[test]
fn jupiter_retrograde_october_2023() {
    let jd = calendar_to_jd(2023, 10, 15.0);
    assert!(daily_motion(Body::Jupiter, jd) < 0.0);
}

#[test]
fn saturn_retrograde_august_2023() {
    let jd = calendar_to_jd(2023, 8, 15.0);
    assert!(daily_motion(Body::Saturn, jd) < 0.0);
}

#[test]
fn mercury_retrograde_december_2023() {
    let jd = calendar_to_jd(2023, 12, 20.0);
    assert!(daily_motion(Body::Mercury, jd) < 0.0);
}

#[test]
fn mars_direct_august_2023() {
    let jd = calendar_to_jd(2023, 8, 15.0);
    assert!(daily_motion(Body::Mars, jd) > 0.0);
}

#[test]
fn lucknow_sunrise_sunset_july_1994() {
    // Local midnight 1994-07-07 IST = 1994-07-06 18:30 UTC
    let midnight = calendar_to_jd(1994, 7, 6.0 + 18.5 / 24.0);
    let rise = eph().next_sunrise(midnight, &lucknow()).unwrap();
    let set = eph().next_sunset(midnight, &lucknow()).unwrap();

    let rise_local = utc_jd_to_local(rise, 5.5).unwrap();
    let set_local = utc_jd_to_local(set, 5.5).unwrap();
    let rise_h = rise_local.hour() as f64 + rise_local.minute() as f64 / 60.0;
    let set_h = set_local.hour() as f64 + set_local.minute() as f64 / 60.0;

    assert!((5.0..5.6).contains(&rise_h), "sunrise {rise_local}");
    assert!((18.8..19.4).contains(&set_h), "sunset {set_local}");
}
