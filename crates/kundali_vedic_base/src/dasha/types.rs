//! Core dasha types.

use serde::Serialize;

use crate::graha::Graha;

/// Period granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DashaLevel {
    Mahadasha,
    Antardasha,
}

impl DashaLevel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
        }
    }
}

/// One ruled interval `[start_year, end_year)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashaPeriod {
    pub lord: Graha,
    pub level: DashaLevel,
    /// Decimal calendar year, inclusive.
    pub start_year: f64,
    /// Decimal calendar year, exclusive.
    pub end_year: f64,
    pub duration_years: f64,
}

impl DashaPeriod {
    pub fn new(lord: Graha, level: DashaLevel, start_year: f64, end_year: f64) -> Self {
        Self {
            lord,
            level,
            start_year,
            end_year,
            duration_years: end_year - start_year,
        }
    }

    pub fn contains(&self, year: f64) -> bool {
        self.start_year <= year && year < self.end_year
    }
}
