//! Birth balance: the unexpired share of the period running at birth.

use serde::Serialize;

use super::vimshottari::{nakshatra_lord, vimshottari_years};
use crate::graha::Graha;
use crate::nakshatra::nakshatra_from_longitude;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BirthBalance {
    /// Moon's nakshatra, 0 = Ashwini.
    pub nakshatra_index: u8,
    /// Lord of the running period: `sequence[nakshatra mod 9]`.
    pub lord: Graha,
    /// Share of the nakshatra already traversed, [0, 1).
    pub elapsed_fraction: f64,
    /// `years(lord) × (1 − elapsed_fraction)`.
    pub balance_years: f64,
}

/// Birth balance from the Moon's sidereal longitude.
pub fn nakshatra_birth_balance(moon_sidereal_deg: f64) -> BirthBalance {
    let nak = nakshatra_from_longitude(moon_sidereal_deg);
    let lord = nakshatra_lord(nak.nakshatra_index);
    let elapsed_fraction = nak.elapsed_fraction();
    BirthBalance {
        nakshatra_index: nak.nakshatra_index,
        lord,
        elapsed_fraction,
        balance_years: vimshottari_years(lord) * (1.0 - elapsed_fraction),
    }
}
