//! Sidereal chart engine: orchestration over an ephemeris.
//!
//! This crate provides:
//! - Graha positions with retrograde detection and the mean nodes
//! - D1, divisional and Moon charts with whole-sign houses
//! - Panchang at birth and at sunrise with bounded boundary-time search
//! - Vimshottari timelines for a birth
//! - `KundaliEngine`, the facade over all of the above, and its
//!   configuration

pub mod config;
pub mod dasha;
pub mod engine;
pub mod error;
pub mod jyotish;
pub mod jyotish_types;
pub mod panchang;
pub mod panchang_types;
pub mod search_util;

pub use config::{EngineConfig, MAX_DASHA_HORIZON_YEARS, SearchConfig};
pub use dasha::{CurrentDasha, DashaTimeline, Mahadasha, current_dasha, dasha_timeline};
pub use engine::{BirthAttributes, Kundali, KundaliEngine, birth_attributes};
pub use error::SearchError;
pub use jyotish::{
    NatalPositions, RETROGRADE_SAMPLE_DAYS, divisional_chart, graha_sidereal_longitude,
    graha_sidereal_longitudes, is_retrograde, moon_chart, natal_positions, rashi_chart,
};
pub use jyotish_types::{
    ASCENDANT_NAME, Chart, ChartVariant, DivisionalChart, DivisionalPosition, GrahaLongitudes,
    HouseEntry, PlanetPosition,
};
pub use panchang::{
    element_end_time, element_name, nakshatra_entry_time, panchang_for_birth,
    panchang_indices_at, preceding_sunrise, sun_moon_sidereal,
};
pub use panchang_types::{
    ALL_PANCHANG_KINDS, BoundaryTime, LocalInstant, Panchang, PanchangElement, PanchangIndices,
    PanchangKind,
};
pub use search_util::{REFINE_TOLERANCE_DAYS, StepDirection, StepOutcome, step_until_change};
