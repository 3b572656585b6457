//! Vimshottari dasha (planetary periods).
//!
//! Nine lords in a fixed cycle with fixed lengths summing to 120 years.
//! The cycle starts at the lord of the Moon's birth nakshatra with only the
//! untraversed share of that lord's years left (the birth balance), then
//! continues with full periods. Each mahadasha splits into nine
//! antardashas in the same cyclic order, starting from its own lord.
//!
//! Period bounds are decimal calendar years.

pub mod balance;
pub mod query;
pub mod subperiod;
pub mod types;
pub mod vimshottari;

pub use balance::{BirthBalance, nakshatra_birth_balance};
pub use query::current_period;
pub use subperiod::{antardashas, proportional_children, snap_last_child_end};
pub use types::{DashaLevel, DashaPeriod};
pub use vimshottari::{
    VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS, nakshatra_lord, vimshottari_mahadashas,
    vimshottari_years,
};
