//! Tithi, yoga and karana indices from sidereal Sun and Moon longitudes.
//!
//! - tithi  = floor(((m − s) mod 360) / 12) + 1, 1..=30
//! - yoga   = floor(((s + m) mod 360) / (360/27)) + 1, 1..=27
//! - karana = floor(((m − s) mod 360) / 6) + 1, 1..=60
//!
//! Tithi and karana depend only on the elongation, so the ayanamsha
//! cancels out of them; yoga depends on it twice.

use serde::Serialize;

use crate::error::VedicError;
use crate::nakshatra::NAKSHATRA_SPAN;
use crate::util::normalize_360;

pub const TITHI_SPAN: f64 = 12.0;
pub const KARANA_SPAN: f64 = 6.0;
pub const YOGA_SPAN: f64 = NAKSHATRA_SPAN;

/// Moon − Sun in [0, 360).
pub fn elongation_deg(sun_deg: f64, moon_deg: f64) -> f64 {
    normalize_360(moon_deg - sun_deg)
}

pub fn tithi_index(sun_deg: f64, moon_deg: f64) -> u8 {
    ((elongation_deg(sun_deg, moon_deg) / TITHI_SPAN).floor() as u8).min(29) + 1
}

pub fn yoga_index(sun_deg: f64, moon_deg: f64) -> u8 {
    ((normalize_360(sun_deg + moon_deg) / YOGA_SPAN).floor() as u8).min(26) + 1
}

pub fn karana_index(sun_deg: f64, moon_deg: f64) -> u8 {
    ((elongation_deg(sun_deg, moon_deg) / KARANA_SPAN).floor() as u8).min(59) + 1
}

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Paksha {
    /// Waxing, tithis 1..=15.
    Shukla,
    /// Waning, tithis 16..=30.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

#[rustfmt::skip]
static TITHI_NAMES: [&str; 15] = [
    "Pratipada", "Dwitiya", "Tritiya", "Chaturthi", "Panchami",
    "Shashthi", "Saptami", "Ashtami", "Navami", "Dashami",
    "Ekadashi", "Dwadashi", "Trayodashi", "Chaturdashi", "Purnima",
];

fn check_index(field: &'static str, index: u8, max: u8) -> Result<(), VedicError> {
    if index == 0 || index > max {
        return Err(VedicError::DomainTable(format!(
            "{field} index {index} outside 1..={max}"
        )));
    }
    Ok(())
}

pub fn paksha_of_tithi(tithi: u8) -> Result<Paksha, VedicError> {
    check_index("tithi", tithi, 30)?;
    Ok(if tithi <= 15 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    })
}

/// Name of a tithi; the 30th is Amavasya rather than a second Purnima.
pub fn tithi_name(tithi: u8) -> Result<&'static str, VedicError> {
    check_index("tithi", tithi, 30)?;
    if tithi == 30 {
        return Ok("Amavasya");
    }
    Ok(TITHI_NAMES[((tithi - 1) % 15) as usize])
}

#[rustfmt::skip]
static YOGA_NAMES: [&str; 27] = [
    "Vishkambha", "Priti", "Ayushman", "Saubhagya", "Shobhana", "Atiganda",
    "Sukarma", "Dhriti", "Shula", "Ganda", "Vriddhi", "Dhruva",
    "Vyaghata", "Harshana", "Vajra", "Siddhi", "Vyatipata", "Variyan",
    "Parigha", "Shiva", "Siddha", "Sadhya", "Shubha", "Shukla",
    "Brahma", "Indra", "Vaidhriti",
];

pub fn yoga_name(yoga: u8) -> Result<&'static str, VedicError> {
    check_index("yoga", yoga, 27)?;
    Ok(YOGA_NAMES[(yoga - 1) as usize])
}

/// The 11 karanas: 7 movable ones that repeat and 4 fixed ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Karana {
    Kimstughna,
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
}

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kimstughna => "Kimstughna",
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garaja => "Garaja",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
        }
    }
}

/// Karana index 1: first half of Shukla Pratipada.
pub const KARANA_HEAD_INDEX: u8 = 1;
/// Karana indices 2..=57 cycle through [`MOVABLE_KARANAS`] eight times.
pub const KARANA_CYCLE_FIRST: u8 = 2;
pub const KARANA_CYCLE_LAST: u8 = 57;
/// Karana indices 58..=60: second half of Krishna Chaturdashi and Amavasya.
pub const KARANA_TAIL: [Karana; 3] = [Karana::Shakuni, Karana::Chatushpada, Karana::Naga];

pub const MOVABLE_KARANAS: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
];

/// Karana for an index in 1..=60.
pub fn karana_from_index(index: u8) -> Result<Karana, VedicError> {
    match index {
        KARANA_HEAD_INDEX => Ok(Karana::Kimstughna),
        KARANA_CYCLE_FIRST..=KARANA_CYCLE_LAST => {
            Ok(MOVABLE_KARANAS[((index - KARANA_CYCLE_FIRST) % 7) as usize])
        }
        58..=60 => Ok(KARANA_TAIL[(index - 58) as usize]),
        _ => Err(VedicError::DomainTable(format!(
            "karana index {index} outside 1..=60"
        ))),
    }
}
