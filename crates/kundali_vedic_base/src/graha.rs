//! The nine grahas of a horoscope.
//!
//! Seven are physical bodies placed by the ephemeris; Rahu and Ketu are
//! the lunar nodes and come from [`crate::lunar_nodes`].

use kundali_ephem::Body;
use serde::{Deserialize, Serialize};

/// The 9 Vedic grahas. Serialized by English name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Graha {
    #[serde(rename = "Sun")]
    Surya,
    #[serde(rename = "Moon")]
    Chandra,
    #[serde(rename = "Mars")]
    Mangal,
    #[serde(rename = "Mercury")]
    Buddh,
    #[serde(rename = "Jupiter")]
    Guru,
    #[serde(rename = "Venus")]
    Shukra,
    #[serde(rename = "Saturn")]
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in chart order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The 7 grahas the ephemeris places directly.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

impl Graha {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Ephemeris body, or `None` for the nodes.
    pub const fn body(self) -> Option<Body> {
        match self {
            Self::Surya => Some(Body::Sun),
            Self::Chandra => Some(Body::Moon),
            Self::Mangal => Some(Body::Mars),
            Self::Buddh => Some(Body::Mercury),
            Self::Guru => Some(Body::Jupiter),
            Self::Shukra => Some(Body::Venus),
            Self::Shani => Some(Body::Saturn),
            Self::Rahu | Self::Ketu => None,
        }
    }

    /// Whether the one-day retrograde check applies (all but Sun and Moon).
    pub const fn can_retrograde(self) -> bool {
        !matches!(self, Self::Surya | Self::Chandra)
    }

    pub const fn all() -> &'static [Graha; 9] {
        &ALL_GRAHAS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sapta_grahas_have_bodies() {
        for g in SAPTA_GRAHAS {
            assert!(g.body().is_some(), "{g:?}");
        }
        assert!(Graha::Rahu.body().is_none());
        assert!(Graha::Ketu.body().is_none());
    }

    #[test]
    fn luminaries_never_retrograde() {
        assert!(!Graha::Surya.can_retrograde());
        assert!(!Graha::Chandra.can_retrograde());
        assert!(Graha::Shani.can_retrograde());
    }

    #[test]
    fn serde_uses_english_names() {
        let json = serde_json::to_string(&Graha::Guru).unwrap();
        assert_eq!(json, "\"Jupiter\"");
        let g: Graha = serde_json::from_str("\"Ketu\"").unwrap();
        assert_eq!(g, Graha::Ketu);
    }

    #[test]
    fn index_matches_order() {
        for (i, g) in ALL_GRAHAS.iter().enumerate() {
            assert_eq!(g.index() as usize, i);
        }
    }
}
