//! Antardasha generation.
//!
//! Child length = parent's full years × child's years / 120, in cyclic
//! order from the parent's own lord. For the birth mahadasha only the
//! unexpired tail of its full span is kept.

use super::types::{DashaLevel, DashaPeriod};
use super::vimshottari::{
    VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS, sequence_position, vimshottari_years,
};

/// Pin the last child's end to the parent's end to absorb rounding drift.
pub fn snap_last_child_end(children: &mut [DashaPeriod], parent_end: f64) {
    if let Some(last) = children.last_mut() {
        last.end_year = parent_end;
        last.duration_years = last.end_year - last.start_year;
    }
}

/// Split `[start, start + full_years)` proportionally over the cycle
/// beginning at `first_position`.
pub fn proportional_children(
    start: f64,
    full_years: f64,
    first_position: usize,
    level: DashaLevel,
) -> Vec<DashaPeriod> {
    let n = VIMSHOTTARI_SEQUENCE.len();
    let mut children = Vec::with_capacity(n);
    let mut cursor = start;
    for i in 0..n {
        let (lord, years) = VIMSHOTTARI_SEQUENCE[(first_position + i) % n];
        let end = cursor + full_years * years / VIMSHOTTARI_TOTAL_YEARS;
        children.push(DashaPeriod::new(lord, level, cursor, end));
        cursor = end;
    }
    snap_last_child_end(&mut children, start + full_years);
    children
}

/// Antardashas of a mahadasha, clipped to the mahadasha's own bounds.
pub fn antardashas(maha: &DashaPeriod) -> Vec<DashaPeriod> {
    let full = vimshottari_years(maha.lord);
    let virtual_start = maha.end_year - full;
    let mut children = proportional_children(
        virtual_start,
        full,
        sequence_position(maha.lord),
        DashaLevel::Antardasha,
    );

    children.retain(|c| c.end_year > maha.start_year);
    if let Some(first) = children.first_mut() {
        if first.start_year < maha.start_year {
            *first = DashaPeriod::new(
                first.lord,
                DashaLevel::Antardasha,
                maha.start_year,
                first.end_year,
            );
        }
    }
    snap_last_child_end(&mut children, maha.end_year);
    children
}
