//! Full kundali for 1994-07-07 17:10 IST, Lucknow, on the analytic
//! ephemeris.

mod common;

use common::lucknow_1994;
use kundali_ephem::AnalyticEphemeris;
use kundali_search::{ASCENDANT_NAME, EngineConfig, Kundali, KundaliEngine};
use kundali_vedic_base::{Graha, Paksha, SolarMonth, Vaar, nakshatra_lord};

fn kundali() -> Kundali {
    KundaliEngine::with_standard_table(AnalyticEphemeris::new(), EngineConfig::default())
        .unwrap()
        .compute_kundali(&lucknow_1994())
        .unwrap()
}

#[test]
fn chart_points_and_houses() {
    let k = kundali();
    assert_eq!(k.chart.planets.len(), 10);
    assert_eq!(k.chart.ascendant.name, ASCENDANT_NAME);
    assert_eq!(k.chart.ascendant.house, 1);
    for p in &k.chart.planets {
        assert!((1..=12).contains(&p.house), "{} house {}", p.name, p.house);
        assert!((0.0..360.0).contains(&p.sidereal_longitude), "{}", p.name);
        assert!((1..=4).contains(&p.pada), "{}", p.name);
    }
}

#[test]
fn sun_moon_and_ascendant_signs() {
    let k = kundali();
    // Sun near 81° sidereal; proxy ascendant Sun + 167.5°.
    assert_eq!(k.chart.planet(Graha::Surya).unwrap().sign_name, "Mithuna");
    assert_eq!(k.chart.ascendant.sign_name, "Dhanu");

    let moon = k.chart.planet(Graha::Chandra).unwrap();
    assert_eq!(moon.sign_name, "Mithuna");
    assert_eq!(moon.nakshatra_name, "Mrigashira");
    assert_eq!(moon.house, 7);
    assert!(!moon.is_retrograde);
}

#[test]
fn dasha_starts_with_moon_nakshatra_lord() {
    let k = kundali();
    let moon = k.chart.planet(Graha::Chandra).unwrap();
    let first = k.dasha.mahadashas[0].period;
    assert_eq!(first.lord, nakshatra_lord(moon.nakshatra_index));
    assert_eq!(first.lord, Graha::Mangal);
    assert!(first.duration_years < 7.0);
    assert!((k.dasha.birth_year - 1994.514).abs() < 0.001);
    // Mars balance, then Rahu.
    assert_eq!(k.dasha.mahadashas[1].period.lord, Graha::Rahu);
}

#[test]
fn panchang_particulars() {
    let p = kundali().panchang;
    assert!((28..=29).contains(&p.tithi.at_birth), "tithi {}", p.tithi.at_birth);
    assert_eq!(p.paksha, Paksha::Krishna);
    assert_eq!(p.vaar, Vaar::Guruvara);
    assert_eq!(p.vaar_lord, Graha::Guru);
    assert!((4..=5).contains(&p.prahar), "prahar {}", p.prahar);
    assert_eq!(p.solar_month, SolarMonth::Aani);
    assert_eq!(p.nakshatra.at_birth, 4);

    for kind in kundali_search::ALL_PANCHANG_KINDS {
        let e = p.element(kind);
        let end = e.end_time.jd_utc().expect("boundary within the step cap");
        assert!(end > p.sunrise.jd_utc, "{kind:?}");
    }
    let entry = p.nakshatra_entry.jd_utc().unwrap();
    assert!(entry < p.nakshatra.end_time.jd_utc().unwrap());
}

#[test]
fn attributes_follow_moon() {
    let a = kundali().attributes;
    assert_eq!(a.avakhada.sign, "Mithuna");
    assert_eq!(a.avakhada.nakshatra, "Mrigashira");
    assert_eq!(a.avakhada.nakshatra_lord, Graha::Mangal);
    assert_eq!(a.ascendant_sign, "Dhanu");
    assert_eq!(a.ascendant_lord, Graha::Guru);
}

#[test]
fn repeated_computation_is_identical() {
    assert_eq!(kundali(), kundali());
}
