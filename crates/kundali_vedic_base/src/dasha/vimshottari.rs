//! Vimshottari sequence and mahadasha generation.

use super::balance::nakshatra_birth_balance;
use super::types::{DashaLevel, DashaPeriod};
use crate::graha::Graha;

/// Cyclic lord order with years per full period.
pub const VIMSHOTTARI_SEQUENCE: [(Graha, f64); 9] = [
    (Graha::Ketu, 7.0),
    (Graha::Shukra, 20.0),
    (Graha::Surya, 6.0),
    (Graha::Chandra, 10.0),
    (Graha::Mangal, 7.0),
    (Graha::Rahu, 18.0),
    (Graha::Guru, 16.0),
    (Graha::Shani, 19.0),
    (Graha::Buddh, 17.0),
];

pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Full-period years of a lord.
pub fn vimshottari_years(lord: Graha) -> f64 {
    VIMSHOTTARI_SEQUENCE
        .iter()
        .find(|(g, _)| *g == lord)
        .map_or(0.0, |&(_, years)| years)
}

/// Position of a lord in the cycle.
pub(crate) fn sequence_position(lord: Graha) -> usize {
    VIMSHOTTARI_SEQUENCE
        .iter()
        .position(|(g, _)| *g == lord)
        .unwrap_or(0)
}

/// Lord of a nakshatra: `sequence[index mod 9]`.
pub fn nakshatra_lord(nakshatra_index: u8) -> Graha {
    VIMSHOTTARI_SEQUENCE[(nakshatra_index % 9) as usize].0
}

/// Mahadashas from birth until `horizon_years` after it.
///
/// The first period is the birth balance. Full periods follow in cyclic
/// order; the last one emitted is the first to reach or pass the horizon.
pub fn vimshottari_mahadashas(
    moon_sidereal_deg: f64,
    birth_year: f64,
    horizon_years: f64,
) -> Vec<DashaPeriod> {
    let balance = nakshatra_birth_balance(moon_sidereal_deg);
    let horizon = birth_year + horizon_years;

    let mut periods = Vec::with_capacity(11);
    let mut end = birth_year + balance.balance_years;
    periods.push(DashaPeriod::new(
        balance.lord,
        DashaLevel::Mahadasha,
        birth_year,
        end,
    ));

    let mut pos = sequence_position(balance.lord);
    while end < horizon {
        pos = (pos + 1) % VIMSHOTTARI_SEQUENCE.len();
        let (lord, years) = VIMSHOTTARI_SEQUENCE[pos];
        let start = end;
        end = start + years;
        periods.push(DashaPeriod::new(lord, DashaLevel::Mahadasha, start, end));
    }
    periods
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nakshatra::NAKSHATRA_SPAN;

    #[test]
    fn cycle_totals_120() {
        let total: f64 = VIMSHOTTARI_SEQUENCE.iter().map(|(_, y)| y).sum();
        assert_eq!(total, VIMSHOTTARI_TOTAL_YEARS);
    }

    #[test]
    fn nakshatra_lords_repeat_every_nine() {
        assert_eq!(nakshatra_lord(0), Graha::Ketu);
        assert_eq!(nakshatra_lord(9), Graha::Ketu);
        assert_eq!(nakshatra_lord(18), Graha::Ketu);
        assert_eq!(nakshatra_lord(3), Graha::Chandra);
        assert_eq!(nakshatra_lord(26), Graha::Buddh);
    }

    #[test]
    fn starts_with_full_period_at_nakshatra_start() {
        // Moon at the very start of Rohini → full Moon period
        let p = vimshottari_mahadashas(3.0 * NAKSHATRA_SPAN + 1e-9, 2000.0, 120.0);
        assert_eq!(p[0].lord, Graha::Chandra);
        assert!((p[0].duration_years - 10.0).abs() < 1e-6);
        assert_eq!(p[1].lord, Graha::Mangal);
    }

    #[test]
    fn half_balance_midway() {
        let p = vimshottari_mahadashas(NAKSHATRA_SPAN * 1.5, 1990.0, 120.0);
        assert_eq!(p[0].lord, Graha::Shukra);
        assert!((p[0].duration_years - 10.0).abs() < 1e-9);
    }

    #[test]
    fn contiguous_and_reaches_horizon() {
        let birth = 1994.514;
        let p = vimshottari_mahadashas(200.0, birth, 120.0);
        for w in p.windows(2) {
            assert_eq!(w[0].end_year, w[1].start_year);
        }
        let last = p.last().unwrap();
        assert!(last.end_year >= birth + 120.0);
        assert!(p[p.len() - 2].end_year < birth + 120.0);
    }

    #[test]
    fn full_cycle_after_balance_is_120() {
        let p = vimshottari_mahadashas(123.4, 1950.0, 240.0);
        let cycle: f64 = p[1..10].iter().map(|d| d.duration_years).sum();
        assert!((cycle - 120.0).abs() < 1e-9, "{cycle}");
    }

    #[test]
    fn shorter_horizon_stops_early() {
        let p = vimshottari_mahadashas(0.0, 2000.0, 20.0);
        // Ketu 7 + Venus 20 reaches 27 ≥ 20
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn years_lookup() {
        assert_eq!(vimshottari_years(Graha::Shani), 19.0);
        assert_eq!(vimshottari_years(Graha::Rahu), 18.0);
    }
}
