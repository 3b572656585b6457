//! Types for chart orchestration (graha longitudes, chart variants).

use kundali_vedic_base::Graha;
use serde::{Serialize, Serializer};

/// Name used for the ascendant entry in position lists.
pub const ASCENDANT_NAME: &str = "Ascendant";

/// Sidereal longitudes of all 9 grahas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrahaLongitudes {
    /// Sidereal longitudes indexed by `Graha::index()` (0-8).
    pub longitudes: [f64; 9],
}

impl GrahaLongitudes {
    pub fn longitude(&self, graha: Graha) -> f64 {
        self.longitudes[graha.index() as usize]
    }

    /// 0-based rashi index (0-11) of a graha.
    pub fn rashi_index(&self, graha: Graha) -> u8 {
        ((self.longitude(graha) / 30.0).floor() as u8).min(11)
    }
}

/// Which transformation of the natal positions a chart shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartVariant {
    /// D1: untransformed, houses from the ascendant.
    Rashi,
    /// Dn: signs remapped by harmonic division, houses from the
    /// divisional ascendant.
    Divisional(u16),
    /// D1 signs with houses counted from the Moon.
    MoonChart,
}

impl ChartVariant {
    pub fn name(self) -> String {
        match self {
            Self::Rashi => "D1".to_string(),
            Self::Divisional(n) => format!("D{n}"),
            Self::MoonChart => "MoonChart".to_string(),
        }
    }
}

impl Serialize for ChartVariant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name())
    }
}

/// Full placement of one chart point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetPosition {
    /// English graha name, or [`ASCENDANT_NAME`].
    pub name: &'static str,
    /// `None` for the ascendant.
    pub graha: Option<Graha>,
    /// Sidereal longitude in degrees [0, 360).
    pub sidereal_longitude: f64,
    pub sign_index: u8,
    pub sign_name: String,
    pub western_sign_name: &'static str,
    pub sign_lord: Graha,
    /// Degrees within the sign, [0, 30).
    pub degree_in_sign: f64,
    /// Degree within the sign as `DD° MM' SS"`.
    pub dms: String,
    pub nakshatra_index: u8,
    pub nakshatra_name: String,
    pub nakshatra_lord: Graha,
    /// 1-4
    pub pada: u8,
    pub is_retrograde: bool,
    /// Whole-sign house, 1-12.
    pub house: u8,
}

/// Sign-level placement in a divisional chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DivisionalPosition {
    pub name: &'static str,
    pub graha: Option<Graha>,
    pub sign_index: u8,
    pub sign_name: String,
    pub sign_lord: Graha,
    pub is_retrograde: bool,
    pub house: u8,
}

/// One whole-sign house and what occupies it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseEntry {
    /// 1-12
    pub number: u8,
    pub sign_index: u8,
    pub sign_name: String,
    /// Names of the chart points placed in this house.
    pub occupants: Vec<&'static str>,
}

/// A chart with full position detail (D1 or Moon chart).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub variant: ChartVariant,
    pub ayanamsha_deg: f64,
    pub ascendant: PlanetPosition,
    /// Ascendant first, then Sun through Ketu.
    pub planets: Vec<PlanetPosition>,
    pub houses: Vec<HouseEntry>,
}

impl Chart {
    pub fn planet(&self, graha: Graha) -> Option<&PlanetPosition> {
        self.planets.iter().find(|p| p.graha == Some(graha))
    }
}

/// A divisional chart; sign and house only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DivisionalChart {
    pub variant: ChartVariant,
    pub divisor: u16,
    /// Ascendant first, then Sun through Ketu.
    pub planets: Vec<DivisionalPosition>,
    pub houses: Vec<HouseEntry>,
}

impl DivisionalChart {
    pub fn planet(&self, graha: Graha) -> Option<&DivisionalPosition> {
        self.planets.iter().find(|p| p.graha == Some(graha))
    }
}
