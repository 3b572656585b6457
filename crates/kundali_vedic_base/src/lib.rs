//! Sidereal Vedic calculations built on tropical ephemeris outputs.
//!
//! This crate provides:
//! - Ayanamsha models (Lahiri polynomial, linear per year)
//! - Rashi, nakshatra and pada classification with lordship
//! - Mean lunar nodes and ascendant strategies
//! - Whole-sign houses and divisional (amsha) sign mapping
//! - Vimshottari dasha periods with antardashas
//! - Tithi, yoga, karana, vaar, paksha, prahar and solar month
//! - The attribute lookup table and avakhada mapping
//! - `BirthMoment` validation
//!
//! Everything here is pure: no ephemeris queries, no I/O except explicit
//! table loading.

pub mod amsha;
pub mod avakhada;
pub mod ayanamsha;
pub mod birth;
pub mod dasha;
pub mod error;
pub mod graha;
pub mod house;
pub mod lagna;
pub mod lunar_nodes;
pub mod masa;
pub mod nakshatra;
pub mod panchang;
pub mod rashi;
pub mod util;
pub mod vaar;

pub use amsha::{
    MAX_DIVISOR, NAVAMSHA, check_divisor, divisional_sign, divisional_sign_for_longitude,
    part_index, start_offset,
};
pub use avakhada::{
    AttributeTable, Avakhada, NakshatraAttributes, PayaBucket, SignAttributes, Yunja, avakhada,
};
pub use ayanamsha::{ALL_AYANAMSHA_MODELS, AyanamshaModel};
pub use birth::{BirthMoment, MAX_UTC_OFFSET_HOURS, ObserverState};
pub use dasha::{
    BirthBalance, DashaLevel, DashaPeriod, VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS,
    antardashas, current_period, nakshatra_birth_balance, nakshatra_lord,
    vimshottari_mahadashas, vimshottari_years,
};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS};
pub use house::{sign_of_house, whole_sign_house};
pub use lagna::{
    AscendantInputs, AscendantMethod, hour_angle_proxy_deg, oblique_ascendant_tropical_deg,
};
pub use lunar_nodes::{mean_ketu_deg, mean_rahu_deg};
pub use masa::{ALL_SOLAR_MONTHS, SolarMonth};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_from_longitude,
};
pub use panchang::{
    Karana, Paksha, elongation_deg, karana_from_index, karana_index, paksha_of_tithi, tithi_index,
    tithi_name, yoga_index, yoga_name,
};
pub use rashi::{
    ALL_RASHIS, Dms, Modality, Rashi, RashiInfo, deg_to_dms, dms_to_deg, rashi_from_longitude,
};
pub use util::{normalize_360, normalize_pm180};
pub use vaar::{ALL_VAARS, PRAHARS_PER_DAY, Vaar, prahar};
