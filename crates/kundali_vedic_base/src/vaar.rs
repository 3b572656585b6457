//! Vaar (weekday) and prahar (three-hour watch) of the Vedic day.
//!
//! The Vedic day runs from one sunrise to the next, so both are taken
//! relative to the sunrise preceding the moment of interest.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::graha::Graha;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Vaar {
    Ravivara,
    Somavara,
    Mangalavara,
    Budhavara,
    Guruvara,
    Shukravara,
    Shanivara,
}

pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivara,
    Vaar::Somavara,
    Vaar::Mangalavara,
    Vaar::Budhavara,
    Vaar::Guruvara,
    Vaar::Shukravara,
    Vaar::Shanivara,
];

impl Vaar {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivara => "Ravivara",
            Self::Somavara => "Somavara",
            Self::Mangalavara => "Mangalavara",
            Self::Budhavara => "Budhavara",
            Self::Guruvara => "Guruvara",
            Self::Shukravara => "Shukravara",
            Self::Shanivara => "Shanivara",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Ravivara => "Sunday",
            Self::Somavara => "Monday",
            Self::Mangalavara => "Tuesday",
            Self::Budhavara => "Wednesday",
            Self::Guruvara => "Thursday",
            Self::Shukravara => "Friday",
            Self::Shanivara => "Saturday",
        }
    }

    /// Ruling graha of the weekday.
    pub const fn lord(self) -> Graha {
        match self {
            Self::Ravivara => Graha::Surya,
            Self::Somavara => Graha::Chandra,
            Self::Mangalavara => Graha::Mangal,
            Self::Budhavara => Graha::Buddh,
            Self::Guruvara => Graha::Guru,
            Self::Shukravara => Graha::Shukra,
            Self::Shanivara => Graha::Shani,
        }
    }

    /// Weekday of a local civil date.
    pub fn from_date(date: NaiveDate) -> Self {
        ALL_VAARS[date.weekday().num_days_from_sunday() as usize]
    }
}

/// Number of prahars in a Vedic day.
pub const PRAHARS_PER_DAY: u8 = 8;

/// Prahar (1..=8) of `jd` counted in three-hour steps from `sunrise_jd`.
///
/// Values outside the day are clamped to the first or last watch.
pub fn prahar(jd: f64, sunrise_jd: f64) -> u8 {
    let watches = ((jd - sunrise_jd) * 8.0).floor();
    (watches.clamp(0.0, (PRAHARS_PER_DAY - 1) as f64) as u8) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_weekday() {
        // 1994-07-07 was a Thursday
        let d = NaiveDate::from_ymd_opt(1994, 7, 7).unwrap();
        assert_eq!(Vaar::from_date(d), Vaar::Guruvara);
        assert_eq!(Vaar::Guruvara.lord(), Graha::Guru);
        assert_eq!(Vaar::Guruvara.english_name(), "Thursday");
    }

    #[test]
    fn prahar_steps() {
        let sunrise = 2_449_540.49;
        assert_eq!(prahar(sunrise, sunrise), 1);
        assert_eq!(prahar(sunrise + 2.9 / 24.0, sunrise), 1);
        assert_eq!(prahar(sunrise + 3.1 / 24.0, sunrise), 2);
        assert_eq!(prahar(sunrise + 11.9 / 24.0, sunrise), 4);
        assert_eq!(prahar(sunrise + 23.9 / 24.0, sunrise), 8);
    }

    #[test]
    fn prahar_clamps() {
        assert_eq!(prahar(10.0, 11.0), 1);
        assert_eq!(prahar(12.5, 11.0), 8);
    }
}
