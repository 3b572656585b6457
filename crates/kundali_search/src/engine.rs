//! `KundaliEngine`: the computation surface over an [`Ephemeris`].
//!
//! The engine owns its ephemeris, a shared read-only attribute table and a
//! validated configuration. Every `compute_*` call is independent and
//! deterministic; the engine holds no mutable state, so one instance can
//! serve concurrent callers.

use std::sync::Arc;

use chrono::NaiveDateTime;
use kundali_ephem::Ephemeris;
use kundali_time::decimal_year;
use kundali_vedic_base::{
    AttributeTable, Avakhada, BirthMoment, Graha, NAVAMSHA, ObserverState, avakhada,
    nakshatra_from_longitude,
};
use serde::Serialize;
use tracing::debug;

use crate::config::EngineConfig;
use crate::dasha::{CurrentDasha, DashaTimeline, current_dasha, dasha_timeline};
use crate::error::SearchError;
use crate::jyotish::{NatalPositions, divisional_chart, moon_chart, natal_positions, rashi_chart};
use crate::jyotish_types::{Chart, DivisionalChart};
use crate::panchang::panchang_for_birth;
use crate::panchang_types::Panchang;

/// Avakhada record plus the ascendant's sign and lord.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthAttributes {
    #[serde(flatten)]
    pub avakhada: Avakhada,
    pub ascendant_sign_index: u8,
    pub ascendant_sign: String,
    pub ascendant_lord: Graha,
}

/// Everything computed for one birth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kundali {
    pub birth: BirthMoment,
    pub chart: Chart,
    pub navamsha: DivisionalChart,
    pub moon_chart: Chart,
    pub dasha: DashaTimeline,
    pub panchang: Panchang,
    pub attributes: BirthAttributes,
}

/// Attribute lookup for the natal Moon and ascendant.
pub fn birth_attributes(
    table: &AttributeTable,
    natal: &NatalPositions,
) -> Result<BirthAttributes, SearchError> {
    let moon = natal.longitudes.longitude(Graha::Chandra);
    let nak = nakshatra_from_longitude(moon);
    let record = avakhada(
        table,
        natal.moon_sign_index(),
        nak.nakshatra_index,
        nak.pada,
    )?;
    let ascendant_sign_index = natal.ascendant_sign_index();
    let ascendant = table.sign(ascendant_sign_index)?;
    Ok(BirthAttributes {
        avakhada: record,
        ascendant_sign_index,
        ascendant_sign: ascendant.name.clone(),
        ascendant_lord: ascendant.lord,
    })
}

/// Sidereal chart engine.
#[derive(Debug, Clone)]
pub struct KundaliEngine<E> {
    ephemeris: E,
    table: Arc<AttributeTable>,
    config: EngineConfig,
}

impl<E: Ephemeris> KundaliEngine<E> {
    /// Build an engine; the configuration is validated here.
    pub fn new(
        ephemeris: E,
        table: Arc<AttributeTable>,
        config: EngineConfig,
    ) -> Result<Self, SearchError> {
        config.validate().map_err(SearchError::InvalidConfig)?;
        Ok(Self {
            ephemeris,
            table,
            config,
        })
    }

    /// Engine with the embedded attribute table.
    pub fn with_standard_table(ephemeris: E, config: EngineConfig) -> Result<Self, SearchError> {
        Self::new(ephemeris, Arc::new(AttributeTable::standard()?), config)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn table(&self) -> &Arc<AttributeTable> {
        &self.table
    }

    pub fn ephemeris(&self) -> &E {
        &self.ephemeris
    }

    fn observe(&self, birth: &BirthMoment) -> Result<ObserverState, SearchError> {
        Ok(birth.observer()?)
    }

    fn natal(&self, observer: &ObserverState) -> Result<NatalPositions, SearchError> {
        natal_positions(
            &self.ephemeris,
            observer,
            self.config.ayanamsha,
            self.config.ascendant,
        )
    }

    fn timeline(&self, natal: &NatalPositions, observer: &ObserverState) -> DashaTimeline {
        let timeline = dasha_timeline(
            natal.longitudes.longitude(Graha::Chandra),
            observer.birth_year_fraction,
            self.config.dasha_horizon_years,
            self.config.antardasha,
        );
        debug!(
            moon_sidereal_deg = timeline.moon_sidereal_deg,
            birth_year = timeline.birth_year,
            first_lord = timeline.balance.lord.english_name(),
            balance_years = timeline.balance.balance_years,
            periods = timeline.mahadashas.len(),
            "dasha timeline computed"
        );
        timeline
    }

    /// D1 chart: ascendant, Sun through Ketu, and houses.
    pub fn compute_chart(&self, birth: &BirthMoment) -> Result<Chart, SearchError> {
        let observer = self.observe(birth)?;
        let natal = self.natal(&observer)?;
        rashi_chart(&self.table, &natal)
    }

    /// Divisional chart for `divisor` (1..=300).
    pub fn compute_divisional_chart(
        &self,
        birth: &BirthMoment,
        divisor: u16,
    ) -> Result<DivisionalChart, SearchError> {
        kundali_vedic_base::check_divisor(divisor)?;
        let observer = self.observe(birth)?;
        let natal = self.natal(&observer)?;
        divisional_chart(&self.table, &natal, divisor)
    }

    /// D1 positions with houses counted from the Moon.
    pub fn compute_moon_chart(&self, birth: &BirthMoment) -> Result<Chart, SearchError> {
        let observer = self.observe(birth)?;
        let natal = self.natal(&observer)?;
        moon_chart(&self.table, &natal)
    }

    /// Vimshottari periods from birth to the configured horizon.
    pub fn compute_periods(&self, birth: &BirthMoment) -> Result<DashaTimeline, SearchError> {
        let observer = self.observe(birth)?;
        let natal = self.natal(&observer)?;
        Ok(self.timeline(&natal, &observer))
    }

    /// Periods running at a local date and time; `None` outside the
    /// sequence.
    pub fn current_period(
        &self,
        birth: &BirthMoment,
        as_of: NaiveDateTime,
    ) -> Result<Option<CurrentDasha>, SearchError> {
        let timeline = self.compute_periods(birth)?;
        let as_of_year = decimal_year(as_of);
        let current = current_dasha(&timeline, as_of_year);
        if current.is_none() {
            debug!(as_of_year, "no running period");
        }
        Ok(current)
    }

    /// Panchang at birth with boundary times and birth-day particulars.
    pub fn compute_panchang(&self, birth: &BirthMoment) -> Result<Panchang, SearchError> {
        let observer = self.observe(birth)?;
        panchang_for_birth(
            &self.ephemeris,
            &self.table,
            &observer,
            self.config.ayanamsha,
            &self.config.search,
        )
    }

    /// Avakhada attributes of the natal Moon, with the ascendant sign.
    pub fn compute_attributes(&self, birth: &BirthMoment) -> Result<BirthAttributes, SearchError> {
        let observer = self.observe(birth)?;
        let natal = self.natal(&observer)?;
        birth_attributes(&self.table, &natal)
    }

    /// D1, D9, Moon chart, periods, panchang and attributes together.
    pub fn compute_kundali(&self, birth: &BirthMoment) -> Result<Kundali, SearchError> {
        let observer = self.observe(birth)?;
        let natal = self.natal(&observer)?;
        let kundali = Kundali {
            birth: *birth,
            chart: rashi_chart(&self.table, &natal)?,
            navamsha: divisional_chart(&self.table, &natal, NAVAMSHA)?,
            moon_chart: moon_chart(&self.table, &natal)?,
            dasha: self.timeline(&natal, &observer),
            panchang: panchang_for_birth(
                &self.ephemeris,
                &self.table,
                &observer,
                self.config.ayanamsha,
                &self.config.search,
            )?,
            attributes: birth_attributes(&self.table, &natal)?,
        };
        debug!(jd_utc = observer.jd_utc, "kundali computed");
        Ok(kundali)
    }
}
