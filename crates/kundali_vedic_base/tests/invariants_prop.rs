//! Property tests for range, house, divisional and period invariants.

use kundali_vedic_base::{
    NAKSHATRA_SPAN, VIMSHOTTARI_TOTAL_YEARS, divisional_sign_for_longitude, karana_from_index,
    karana_index, nakshatra_from_longitude, rashi_from_longitude, sign_of_house, tithi_index,
    vimshottari_mahadashas, whole_sign_house, yoga_index,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn classification_ranges(lon in -720.0f64..720.0) {
        let r = rashi_from_longitude(lon);
        prop_assert!(r.rashi_index < 12);
        prop_assert!((0.0..30.0).contains(&r.degrees_in_rashi));
        let n = nakshatra_from_longitude(lon);
        prop_assert!(n.nakshatra_index < 27);
        prop_assert!((1..=4).contains(&n.pada));
        prop_assert!((0.0..NAKSHATRA_SPAN).contains(&n.degrees_in_nakshatra));
    }

    #[test]
    fn reference_sign_is_first_house(reference in 0u8..12, sign in 0u8..12) {
        prop_assert_eq!(whole_sign_house(reference, reference), 1);
        let h = whole_sign_house(sign, reference);
        prop_assert!((1..=12).contains(&h));
        prop_assert_eq!(sign_of_house(h, reference), sign);
        prop_assert_eq!((reference + h - 1) % 12, sign);
    }

    #[test]
    fn navamsha_constant_within_a_part(part in 0u32..108, a in 0.0f64..1.0, b in 0.0f64..1.0) {
        let width = 30.0 / 9.0;
        let base = part as f64 * width;
        let la = base + (0.001 + a * 0.998) * width;
        let lb = base + (0.001 + b * 0.998) * width;
        prop_assert_eq!(
            divisional_sign_for_longitude(la, 9).unwrap(),
            divisional_sign_for_longitude(lb, 9).unwrap()
        );
    }

    #[test]
    fn panchang_index_ranges(sun in 0.0f64..360.0, moon in 0.0f64..360.0) {
        prop_assert!((1..=30).contains(&tithi_index(sun, moon)));
        prop_assert!((1..=27).contains(&yoga_index(sun, moon)));
        let k = karana_index(sun, moon);
        prop_assert!((1..=60).contains(&k));
        prop_assert!(karana_from_index(k).is_ok());
    }

    #[test]
    fn periods_contiguous_and_cycle_sums(moon in 0.0f64..360.0, birth in 1900.0f64..2100.0) {
        let p = vimshottari_mahadashas(moon, birth, 240.0);
        prop_assert_eq!(p[0].start_year, birth);
        for w in p.windows(2) {
            prop_assert_eq!(w[0].end_year, w[1].start_year);
        }
        let cycle: f64 = p[1..10].iter().map(|d| d.duration_years).sum();
        prop_assert!((cycle - VIMSHOTTARI_TOTAL_YEARS).abs() < 1e-9);
        prop_assert!(p.last().unwrap().end_year >= birth + 240.0);
    }
}
