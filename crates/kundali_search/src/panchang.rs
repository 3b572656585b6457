//! Panchang at birth: tithi, nakshatra, yoga and karana at the birth
//! instant and at the preceding sunrise, with bounded searches for when
//! each birth value ends and when the Moon entered its nakshatra.
//!
//! Also derives the birth-day particulars that hang off the sunrise:
//! vaar, prahar, paksha and solar month.

use kundali_ephem::{Ephemeris, EphemerisError, GeoLocation};
use kundali_time::utc_jd_to_local;
use kundali_vedic_base::{
    AttributeTable, AyanamshaModel, Graha, ObserverState, SolarMonth, Vaar, karana_from_index,
    nakshatra_from_longitude, paksha_of_tithi, prahar, rashi_from_longitude, tithi_name,
    yoga_name,
};
use tracing::{debug, warn};

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::jyotish::graha_sidereal_longitude;
use crate::panchang_types::{
    ALL_PANCHANG_KINDS, BoundaryTime, LocalInstant, Panchang, PanchangElement, PanchangIndices, PanchangKind,
};
use crate::search_util::{StepDirection, StepOutcome, step_until_change};

/// How far back the sunrise scan starts.
const SUNRISE_LOOKBACK_DAYS: f64 = 1.5;

/// Gap after a found sunrise before asking for the next one.
const SUNRISE_RESCAN_DAYS: f64 = 1.0 / 24.0;

/// Upper bound on sunrises inspected in the lookback window.
const MAX_SUNRISE_CANDIDATES: usize = 3;

/// Sidereal Sun and Moon longitudes at an instant.
pub fn sun_moon_sidereal<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    jd_utc: f64,
    location: &GeoLocation,
    model: AyanamshaModel,
) -> Result<(f64, f64), SearchError> {
    let sun = graha_sidereal_longitude(ephemeris, Graha::Surya, jd_utc, location, model)?;
    let moon = graha_sidereal_longitude(ephemeris, Graha::Chandra, jd_utc, location, model)?;
    Ok((sun, moon))
}

/// Panchang indices at an instant.
pub fn panchang_indices_at<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    jd_utc: f64,
    location: &GeoLocation,
    model: AyanamshaModel,
) -> Result<PanchangIndices, SearchError> {
    let (sun, moon) = sun_moon_sidereal(ephemeris, jd_utc, location, model)?;
    Ok(PanchangIndices::from_longitudes(sun, moon))
}

/// The latest sunrise at or before `jd_utc`, found with `next_sunrise` only.
pub fn preceding_sunrise<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    jd_utc: f64,
    location: &GeoLocation,
) -> Result<f64, SearchError> {
    let mut from = jd_utc - SUNRISE_LOOKBACK_DAYS;
    let mut latest = None;
    for _ in 0..MAX_SUNRISE_CANDIDATES {
        let rise = ephemeris.next_sunrise(from, location)?;
        if rise > jd_utc {
            break;
        }
        latest = Some(rise);
        from = rise + SUNRISE_RESCAN_DAYS;
    }
    let sunrise = latest.ok_or(EphemerisError::NoSunriseEvent {
        jd_utc,
        latitude_deg: location.latitude_deg,
    })?;
    debug!(jd_utc, sunrise, "preceding sunrise");
    Ok(sunrise)
}

fn local_instant(jd_utc: f64, utc_offset_hours: f64) -> Result<LocalInstant, SearchError> {
    Ok(LocalInstant {
        jd_utc,
        local: utc_jd_to_local(jd_utc, utc_offset_hours)?,
    })
}

fn boundary_time(outcome: StepOutcome, utc_offset_hours: f64) -> Result<BoundaryTime, SearchError> {
    Ok(match outcome {
        StepOutcome::Changed { jd, .. } => BoundaryTime::At {
            jd_utc: jd,
            local: utc_jd_to_local(jd, utc_offset_hours)?,
        },
        StepOutcome::Undetermined => BoundaryTime::Undetermined,
    })
}

/// Display name of a limb value.
pub fn element_name(
    table: &AttributeTable,
    kind: PanchangKind,
    index: u8,
) -> Result<String, SearchError> {
    Ok(match kind {
        PanchangKind::Tithi => tithi_name(index)?.to_string(),
        PanchangKind::Nakshatra => table.nakshatra(index)?.name.clone(),
        PanchangKind::Yoga => yoga_name(index)?.to_string(),
        PanchangKind::Karana => karana_from_index(index)?.name().to_string(),
    })
}

/// When the value of `kind` at `jd_utc` next changes.
pub fn element_end_time<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    kind: PanchangKind,
    jd_utc: f64,
    location: &GeoLocation,
    model: AyanamshaModel,
    search: &SearchConfig,
    utc_offset_hours: f64,
) -> Result<BoundaryTime, SearchError> {
    search.validate().map_err(SearchError::InvalidConfig)?;
    let outcome = step_until_change(
        jd_utc,
        search.step_days(),
        search.max_steps,
        StepDirection::Forward,
        search.refine,
        |t| Ok::<_, SearchError>(panchang_indices_at(ephemeris, t, location, model)?.get(kind)),
    )?;
    if outcome == StepOutcome::Undetermined {
        warn!(
            kind = kind.name(),
            jd_utc,
            max_steps = search.max_steps,
            "panchang end time undetermined"
        );
    }
    boundary_time(outcome, utc_offset_hours)
}

/// When the Moon entered the nakshatra it occupies at `jd_utc`.
pub fn nakshatra_entry_time<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    jd_utc: f64,
    location: &GeoLocation,
    model: AyanamshaModel,
    search: &SearchConfig,
    utc_offset_hours: f64,
) -> Result<BoundaryTime, SearchError> {
    search.validate().map_err(SearchError::InvalidConfig)?;
    let outcome = step_until_change(
        jd_utc,
        search.step_days(),
        search.max_steps,
        StepDirection::Backward,
        search.refine,
        |t| {
            let moon = graha_sidereal_longitude(ephemeris, Graha::Chandra, t, location, model)?;
            Ok::<_, SearchError>(nakshatra_from_longitude(moon).nakshatra_index)
        },
    )?;
    if outcome == StepOutcome::Undetermined {
        warn!(jd_utc, max_steps = search.max_steps, "nakshatra entry undetermined");
    }
    boundary_time(outcome, utc_offset_hours)
}

#[allow(clippy::too_many_arguments)]
fn element<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    table: &AttributeTable,
    kind: PanchangKind,
    at_birth: &PanchangIndices,
    at_sunrise: &PanchangIndices,
    observer: &ObserverState,
    model: AyanamshaModel,
    search: &SearchConfig,
) -> Result<PanchangElement, SearchError> {
    let birth_value = at_birth.get(kind);
    let sunrise_value = at_sunrise.get(kind);
    Ok(PanchangElement {
        kind,
        at_birth: birth_value,
        name_at_birth: element_name(table, kind, birth_value)?,
        at_sunrise: sunrise_value,
        name_at_sunrise: element_name(table, kind, sunrise_value)?,
        end_time: element_end_time(
            ephemeris,
            kind,
            observer.jd_utc,
            &observer.location,
            model,
            search,
            observer.utc_offset_hours,
        )?,
    })
}

/// Full panchang for a birth.
///
/// Sunrise or sunset failures propagate as
/// `VedicError::AstronomicalEventUnavailable`.
pub fn panchang_for_birth<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    table: &AttributeTable,
    observer: &ObserverState,
    model: AyanamshaModel,
    search: &SearchConfig,
) -> Result<Panchang, SearchError> {
    search.validate().map_err(SearchError::InvalidConfig)?;
    let jd = observer.jd_utc;
    let location = &observer.location;
    let offset = observer.utc_offset_hours;

    let (sun, moon) = sun_moon_sidereal(ephemeris, jd, location, model)?;
    let at_birth = PanchangIndices::from_longitudes(sun, moon);

    let sunrise_jd = preceding_sunrise(ephemeris, jd, location)?;
    let at_sunrise = panchang_indices_at(ephemeris, sunrise_jd, location, model)?;
    let sunset_jd = ephemeris.next_sunset(sunrise_jd, location)?;
    let sunrise = local_instant(sunrise_jd, offset)?;
    let sunset = local_instant(sunset_jd, offset)?;

    let vaar = Vaar::from_date(sunrise.local.date());
    let solar_month = SolarMonth::from_sun_sign(rashi_from_longitude(sun).rashi_index);

    let [tithi, nakshatra, yoga, karana] = ALL_PANCHANG_KINDS.map(|kind| {
        element(
            ephemeris,
            table,
            kind,
            &at_birth,
            &at_sunrise,
            observer,
            model,
            search,
        )
    });

    let panchang = Panchang {
        ayanamsha_deg: model.ayanamsha_deg(jd),
        sun_sidereal_deg: sun,
        moon_sidereal_deg: moon,
        sunrise,
        sunset,
        vaar,
        vaar_name: vaar.name(),
        vaar_lord: vaar.lord(),
        paksha: paksha_of_tithi(at_birth.tithi)?,
        prahar: prahar(jd, sunrise_jd),
        solar_month,
        solar_month_name: solar_month.name(),
        tithi: tithi?,
        nakshatra: nakshatra?,
        yoga: yoga?,
        karana: karana?,
        nakshatra_entry: nakshatra_entry_time(ephemeris, jd, location, model, search, offset)?,
    };
    debug!(
        tithi = panchang.tithi.at_birth,
        nakshatra = panchang.nakshatra.at_birth,
        yoga = panchang.yoga.at_birth,
        karana = panchang.karana.at_birth,
        vaar = vaar.name(),
        "panchang computed"
    );
    Ok(panchang)
}
