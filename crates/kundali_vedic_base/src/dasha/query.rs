//! Lookup of the period running at a given decimal year.

use super::types::DashaPeriod;

/// The period with `start ≤ year < end`, or `None` outside the sequence.
pub fn current_period(periods: &[DashaPeriod], year: f64) -> Option<&DashaPeriod> {
    if year.is_nan() {
        return None;
    }
    let idx = periods.partition_point(|p| p.end_year <= year);
    periods.get(idx).filter(|p| p.contains(year))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dasha::types::DashaLevel;
    use crate::graha::Graha;

    fn seq() -> Vec<DashaPeriod> {
        vec![
            DashaPeriod::new(Graha::Ketu, DashaLevel::Mahadasha, 2000.0, 2003.0),
            DashaPeriod::new(Graha::Shukra, DashaLevel::Mahadasha, 2003.0, 2023.0),
            DashaPeriod::new(Graha::Surya, DashaLevel::Mahadasha, 2023.0, 2029.0),
        ]
    }

    #[test]
    fn finds_containing_period() {
        let p = seq();
        assert_eq!(current_period(&p, 2000.0).unwrap().lord, Graha::Ketu);
        assert_eq!(current_period(&p, 2003.0).unwrap().lord, Graha::Shukra);
        assert_eq!(current_period(&p, 2028.99).unwrap().lord, Graha::Surya);
    }

    #[test]
    fn outside_sequence_is_none() {
        let p = seq();
        assert!(current_period(&p, 1999.9).is_none());
        assert!(current_period(&p, 2029.0).is_none());
        assert!(current_period(&p, f64::NAN).is_none());
        assert!(current_period(&[], 2010.0).is_none());
    }
}
