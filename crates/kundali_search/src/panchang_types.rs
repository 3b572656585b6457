//! Types for panchang results.

use chrono::NaiveDateTime;
use kundali_vedic_base::{
    Graha, Paksha, SolarMonth, Vaar, karana_index, nakshatra_from_longitude, tithi_index,
    yoga_index,
};
use serde::Serialize;

/// The four searched panchang limbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanchangKind {
    Tithi,
    Nakshatra,
    Yoga,
    Karana,
}

pub const ALL_PANCHANG_KINDS: [PanchangKind; 4] = [
    PanchangKind::Tithi,
    PanchangKind::Nakshatra,
    PanchangKind::Yoga,
    PanchangKind::Karana,
];

impl PanchangKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tithi => "tithi",
            Self::Nakshatra => "nakshatra",
            Self::Yoga => "yoga",
            Self::Karana => "karana",
        }
    }
}

/// Indices of the four limbs at one instant.
///
/// Tithi 1-30, nakshatra 0-26, yoga 1-27, karana 1-60.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PanchangIndices {
    pub tithi: u8,
    pub nakshatra: u8,
    pub yoga: u8,
    pub karana: u8,
}

impl PanchangIndices {
    /// From sidereal Sun and Moon longitudes.
    pub fn from_longitudes(sun_deg: f64, moon_deg: f64) -> Self {
        Self {
            tithi: tithi_index(sun_deg, moon_deg),
            nakshatra: nakshatra_from_longitude(moon_deg).nakshatra_index,
            yoga: yoga_index(sun_deg, moon_deg),
            karana: karana_index(sun_deg, moon_deg),
        }
    }

    pub fn get(&self, kind: PanchangKind) -> u8 {
        match kind {
            PanchangKind::Tithi => self.tithi,
            PanchangKind::Nakshatra => self.nakshatra,
            PanchangKind::Yoga => self.yoga,
            PanchangKind::Karana => self.karana,
        }
    }
}

/// A UTC instant with its local wall clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LocalInstant {
    pub jd_utc: f64,
    pub local: NaiveDateTime,
}

/// Outcome of a bounded boundary search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BoundaryTime {
    At { jd_utc: f64, local: NaiveDateTime },
    /// No change within the step cap.
    Undetermined,
}

impl BoundaryTime {
    pub fn jd_utc(&self) -> Option<f64> {
        match self {
            Self::At { jd_utc, .. } => Some(*jd_utc),
            Self::Undetermined => None,
        }
    }

    pub fn is_determined(&self) -> bool {
        matches!(self, Self::At { .. })
    }
}

/// One limb: value at birth, at the preceding sunrise, and when the birth
/// value ends.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanchangElement {
    pub kind: PanchangKind,
    pub at_birth: u8,
    pub name_at_birth: String,
    pub at_sunrise: u8,
    pub name_at_sunrise: String,
    pub end_time: BoundaryTime,
}

/// Panchang and birth particulars.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panchang {
    pub ayanamsha_deg: f64,
    pub sun_sidereal_deg: f64,
    pub moon_sidereal_deg: f64,
    /// Sunrise that opened the Vedic day of the birth.
    pub sunrise: LocalInstant,
    /// Sunset following that sunrise.
    pub sunset: LocalInstant,
    /// Weekday of the Vedic day.
    pub vaar: Vaar,
    pub vaar_name: &'static str,
    pub vaar_lord: Graha,
    pub paksha: Paksha,
    /// 1-8, three-hour watches from sunrise.
    pub prahar: u8,
    pub solar_month: SolarMonth,
    pub solar_month_name: &'static str,
    pub tithi: PanchangElement,
    pub nakshatra: PanchangElement,
    pub yoga: PanchangElement,
    pub karana: PanchangElement,
    /// When the Moon entered its birth nakshatra.
    pub nakshatra_entry: BoundaryTime,
}

impl Panchang {
    pub fn element(&self, kind: PanchangKind) -> &PanchangElement {
        match kind {
            PanchangKind::Tithi => &self.tithi,
            PanchangKind::Nakshatra => &self.nakshatra,
            PanchangKind::Yoga => &self.yoga,
            PanchangKind::Karana => &self.karana,
        }
    }
}
