//! Cross-checks between the calendar formula and the chrono-backed
//! civil mapping.

use kundali_time::{
    calendar_to_jd, civil_datetime, jd_to_calendar, jd_to_naive, local_to_utc_jd,
    utc_jd_to_local,
};

#[test]
fn calendar_and_civil_agree_across_centuries() {
    for &(y, m, d, h, mi) in &[
        (1900, 3, 1, 0, 0),
        (1947, 8, 15, 0, 0),
        (1994, 7, 7, 17, 10),
        (2024, 2, 29, 23, 59),
        (2099, 12, 31, 6, 30),
    ] {
        let dt = civil_datetime(y, m, d, h, mi).unwrap();
        let jd_cal = calendar_to_jd(y, m, d as f64 + (h as f64 + mi as f64 / 60.0) / 24.0);
        let back = jd_to_naive(jd_cal).unwrap();
        assert_eq!(back, dt, "{y}-{m}-{d} {h}:{mi}");
    }
}

#[test]
fn calendar_roundtrip_day_fraction() {
    let jd = 2_449_540.986_111;
    let (y, m, d) = jd_to_calendar(jd);
    let again = calendar_to_jd(y, m, d);
    assert!((again - jd).abs() < 1e-8);
}

#[test]
fn negative_offset_crosses_midnight() {
    let local = civil_datetime(2010, 1, 1, 20, 0).unwrap();
    let jd = local_to_utc_jd(local, -8.0);
    let utc = jd_to_naive(jd).unwrap();
    assert_eq!(utc, civil_datetime(2010, 1, 2, 4, 0).unwrap());
    assert_eq!(utc_jd_to_local(jd, -8.0).unwrap(), local);
}
