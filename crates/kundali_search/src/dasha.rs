//! Dasha orchestration over the Vimshottari math in `kundali_vedic_base`.
//!
//! - `dasha_timeline`: full timeline from the sidereal Moon longitude
//! - `current_dasha`: running mahadasha and antardasha at a decimal year

use kundali_vedic_base::{
    BirthBalance, DashaPeriod, antardashas, current_period, nakshatra_birth_balance,
    vimshottari_mahadashas,
};
use serde::Serialize;

/// A mahadasha with its sub-periods.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mahadasha {
    #[serde(flatten)]
    pub period: DashaPeriod,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub antardashas: Vec<DashaPeriod>,
}

/// Period sequence for one birth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaTimeline {
    pub moon_sidereal_deg: f64,
    /// Decimal calendar year of the birth.
    pub birth_year: f64,
    pub horizon_years: f64,
    pub balance: BirthBalance,
    pub mahadashas: Vec<Mahadasha>,
}

impl DashaTimeline {
    /// The mahadasha periods alone, in order.
    pub fn periods(&self) -> Vec<DashaPeriod> {
        self.mahadashas.iter().map(|m| m.period).collect()
    }
}

/// Periods running at a queried year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurrentDasha {
    pub as_of_year: f64,
    pub mahadasha: DashaPeriod,
    pub antardasha: Option<DashaPeriod>,
}

/// Timeline from a known sidereal Moon longitude.
pub fn dasha_timeline(
    moon_sidereal_deg: f64,
    birth_year: f64,
    horizon_years: f64,
    with_antardashas: bool,
) -> DashaTimeline {
    let mahadashas = vimshottari_mahadashas(moon_sidereal_deg, birth_year, horizon_years)
        .into_iter()
        .map(|period| Mahadasha {
            antardashas: if with_antardashas {
                antardashas(&period)
            } else {
                Vec::new()
            },
            period,
        })
        .collect();
    DashaTimeline {
        moon_sidereal_deg,
        birth_year,
        horizon_years,
        balance: nakshatra_birth_balance(moon_sidereal_deg),
        mahadashas,
    }
}

/// Running periods at `as_of_year`; `None` before birth or past the horizon.
pub fn current_dasha(timeline: &DashaTimeline, as_of_year: f64) -> Option<CurrentDasha> {
    let periods = timeline.periods();
    let mahadasha = *current_period(&periods, as_of_year)?;
    let children = timeline
        .mahadashas
        .iter()
        .find(|m| m.period == mahadasha)
        .filter(|m| !m.antardashas.is_empty())
        .map_or_else(|| antardashas(&mahadasha), |m| m.antardashas.clone());
    Some(CurrentDasha {
        as_of_year,
        mahadasha,
        antardasha: current_period(&children, as_of_year).copied(),
    })
}
