//! Vedic jyotish orchestration: queries the ephemeris for graha positions.
//!
//! Provides the bridge between an [`Ephemeris`] and the pure-math Vedic
//! modules. Queries the seven bodies, adds the mean nodes, converts to
//! sidereal longitudes with one ayanamsha model, and assembles the D1,
//! divisional and Moon charts with whole-sign houses.

use kundali_ephem::{Ephemeris, GeoLocation};
use kundali_time::jd_to_centuries;
use kundali_vedic_base::{
    ALL_GRAHAS, AscendantInputs, AscendantMethod, AttributeTable, AyanamshaModel, Graha,
    ObserverState, Rashi, check_divisor, divisional_sign, mean_ketu_deg, mean_rahu_deg,
    nakshatra_from_longitude, normalize_360, normalize_pm180, rashi_from_longitude, sign_of_house,
    whole_sign_house,
};
use tracing::debug;

use crate::error::SearchError;
use crate::jyotish_types::{
    ASCENDANT_NAME, Chart, ChartVariant, DivisionalChart, DivisionalPosition, GrahaLongitudes,
    HouseEntry, PlanetPosition,
};

/// Interval between the two samples of the retrograde check.
pub const RETROGRADE_SAMPLE_DAYS: f64 = 1.0;

/// Sidereal longitude of one graha. The nodes come from the mean-node
/// polynomial; everything else from the ephemeris.
pub fn graha_sidereal_longitude<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    graha: Graha,
    jd_utc: f64,
    location: &GeoLocation,
    model: AyanamshaModel,
) -> Result<f64, SearchError> {
    let tropical = match graha.body() {
        Some(body) => ephemeris.body_longitude(body, jd_utc, location)?,
        None if graha == Graha::Ketu => mean_ketu_deg(jd_to_centuries(jd_utc)),
        None => mean_rahu_deg(jd_to_centuries(jd_utc)),
    };
    Ok(model.to_sidereal(tropical, jd_utc))
}

/// Sidereal longitudes of all 9 grahas at one instant.
pub fn graha_sidereal_longitudes<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    jd_utc: f64,
    location: &GeoLocation,
    model: AyanamshaModel,
) -> Result<GrahaLongitudes, SearchError> {
    let mut longitudes = [0.0; 9];
    for graha in ALL_GRAHAS {
        longitudes[graha.index() as usize] =
            graha_sidereal_longitude(ephemeris, graha, jd_utc, location, model)?;
    }
    Ok(GrahaLongitudes { longitudes })
}

/// Retrograde when the longitude one day later lies behind, with the
/// difference taken in (-180, 180]. Sun and Moon are never retrograde.
pub fn is_retrograde<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    graha: Graha,
    jd_utc: f64,
    location: &GeoLocation,
    model: AyanamshaModel,
    longitude_now: f64,
) -> Result<bool, SearchError> {
    if !graha.can_retrograde() {
        return Ok(false);
    }
    let later = graha_sidereal_longitude(
        ephemeris,
        graha,
        jd_utc + RETROGRADE_SAMPLE_DAYS,
        location,
        model,
    )?;
    Ok(normalize_pm180(later - longitude_now) < 0.0)
}

/// Everything a chart needs, computed once per birth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NatalPositions {
    pub jd_utc: f64,
    pub ayanamsha_deg: f64,
    /// Sidereal ascendant in degrees [0, 360).
    pub ascendant_deg: f64,
    pub longitudes: GrahaLongitudes,
    /// Indexed by `Graha::index()`.
    pub retrograde: [bool; 9],
}

impl NatalPositions {
    /// Ascendant followed by the 9 grahas: (name, graha, longitude, retrograde).
    fn points(&self) -> impl Iterator<Item = (&'static str, Option<Graha>, f64, bool)> + '_ {
        std::iter::once((ASCENDANT_NAME, None, self.ascendant_deg, false)).chain(
            Graha::all().iter().map(|&g| {
                (
                    g.english_name(),
                    Some(g),
                    self.longitudes.longitude(g),
                    self.retrograde[g.index() as usize],
                )
            }),
        )
    }

    pub fn ascendant_sign_index(&self) -> u8 {
        rashi_from_longitude(self.ascendant_deg).rashi_index
    }

    pub fn moon_sign_index(&self) -> u8 {
        self.longitudes.rashi_index(Graha::Chandra)
    }
}

/// Query the ephemeris for a birth and derive the ascendant.
pub fn natal_positions<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    observer: &ObserverState,
    ayanamsha: AyanamshaModel,
    ascendant: AscendantMethod,
) -> Result<NatalPositions, SearchError> {
    let jd_utc = observer.jd_utc;
    let location = observer.location;
    let ayanamsha_deg = ayanamsha.ayanamsha_deg(jd_utc);
    let longitudes = graha_sidereal_longitudes(ephemeris, jd_utc, &location, ayanamsha)?;

    let mut retrograde = [false; 9];
    for graha in ALL_GRAHAS {
        retrograde[graha.index() as usize] = is_retrograde(
            ephemeris,
            graha,
            jd_utc,
            &location,
            ayanamsha,
            longitudes.longitude(graha),
        )?;
    }

    let ascendant_deg = ascendant.sidereal_ascendant_deg(&AscendantInputs {
        sun_sidereal_deg: longitudes.longitude(Graha::Surya),
        local_clock_hours: observer.local_clock_hours,
        jd_utc,
        latitude_deg: location.latitude_deg,
        longitude_deg: location.longitude_deg,
        ayanamsha_deg,
    });

    debug!(
        jd_utc,
        ayanamsha = ayanamsha.name(),
        ayanamsha_deg,
        ascendant = ascendant.name(),
        ascendant_deg,
        "natal positions computed"
    );

    Ok(NatalPositions {
        jd_utc,
        ayanamsha_deg,
        ascendant_deg,
        longitudes,
        retrograde,
    })
}

fn position_entry(
    table: &AttributeTable,
    name: &'static str,
    graha: Option<Graha>,
    longitude: f64,
    is_retrograde: bool,
    reference_sign: u8,
) -> Result<PlanetPosition, SearchError> {
    let lon = normalize_360(longitude);
    let rashi = rashi_from_longitude(lon);
    let nak = nakshatra_from_longitude(lon);
    let sign = table.sign(rashi.rashi_index)?;
    let nak_attrs = table.nakshatra(nak.nakshatra_index)?;
    Ok(PlanetPosition {
        name,
        graha,
        sidereal_longitude: lon,
        sign_index: rashi.rashi_index,
        sign_name: sign.name.clone(),
        western_sign_name: rashi.rashi.western_name(),
        sign_lord: sign.lord,
        degree_in_sign: rashi.degrees_in_rashi,
        dms: rashi.dms.to_string(),
        nakshatra_index: nak.nakshatra_index,
        nakshatra_name: nak_attrs.name.clone(),
        nakshatra_lord: nak_attrs.lord,
        pada: nak.pada,
        is_retrograde,
        house: whole_sign_house(rashi.rashi_index, reference_sign),
    })
}

/// Twelve houses counted from `reference_sign`, with occupants.
fn house_entries(
    table: &AttributeTable,
    reference_sign: u8,
    placements: impl Iterator<Item = (&'static str, u8)> + Clone,
) -> Result<Vec<HouseEntry>, SearchError> {
    (1..=12u8)
        .map(|number| {
            let sign_index = sign_of_house(number, reference_sign);
            Ok(HouseEntry {
                number,
                sign_index,
                sign_name: table.sign(sign_index)?.name.clone(),
                occupants: placements
                    .clone()
                    .filter(|&(_, s)| s == sign_index)
                    .map(|(name, _)| name)
                    .collect(),
            })
        })
        .collect()
}

fn full_chart(
    table: &AttributeTable,
    natal: &NatalPositions,
    variant: ChartVariant,
    reference_sign: u8,
) -> Result<Chart, SearchError> {
    let planets = natal
        .points()
        .map(|(name, graha, lon, retro)| {
            position_entry(table, name, graha, lon, retro, reference_sign)
        })
        .collect::<Result<Vec<_>, _>>()?;
    let houses = house_entries(
        table,
        reference_sign,
        planets.iter().map(|p| (p.name, p.sign_index)),
    )?;
    let ascendant = planets[0].clone();
    Ok(Chart {
        variant,
        ayanamsha_deg: natal.ayanamsha_deg,
        ascendant,
        planets,
        houses,
    })
}

/// D1: houses counted from the ascendant's sign.
pub fn rashi_chart(table: &AttributeTable, natal: &NatalPositions) -> Result<Chart, SearchError> {
    full_chart(table, natal, ChartVariant::Rashi, natal.ascendant_sign_index())
}

/// D1 signs with houses counted from the Moon's sign.
pub fn moon_chart(table: &AttributeTable, natal: &NatalPositions) -> Result<Chart, SearchError> {
    full_chart(table, natal, ChartVariant::MoonChart, natal.moon_sign_index())
}

/// Divisional chart for `divisor` (1..=300); houses from the divisional
/// ascendant.
pub fn divisional_chart(
    table: &AttributeTable,
    natal: &NatalPositions,
    divisor: u16,
) -> Result<DivisionalChart, SearchError> {
    check_divisor(divisor)?;
    let mut placed = Vec::with_capacity(10);
    for (name, graha, lon, retro) in natal.points() {
        let rashi = rashi_from_longitude(lon);
        let sign = divisional_sign(rashi.rashi_index, rashi.degrees_in_rashi, divisor)?;
        placed.push((name, graha, sign, retro));
    }
    let reference_sign = placed[0].2;

    let planets = placed
        .iter()
        .map(|&(name, graha, sign_index, is_retrograde)| {
            let attrs = table.sign(sign_index)?;
            Ok(DivisionalPosition {
                name,
                graha,
                sign_index,
                sign_name: attrs.name.clone(),
                sign_lord: attrs.lord,
                is_retrograde,
                house: whole_sign_house(sign_index, reference_sign),
            })
        })
        .collect::<Result<Vec<_>, SearchError>>()?;
    let houses = house_entries(
        table,
        reference_sign,
        planets.iter().map(|p| (p.name, p.sign_index)),
    )?;

    debug!(
        divisor,
        ascendant_sign = Rashi::from_index(reference_sign).name(),
        "divisional chart computed"
    );

    Ok(DivisionalChart {
        variant: ChartVariant::Divisional(divisor),
        divisor,
        planets,
        houses,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn natal(ascendant_deg: f64, longitudes: [f64; 9]) -> NatalPositions {
        NatalPositions {
            jd_utc: 2_451_545.0,
            ayanamsha_deg: 23.853,
            ascendant_deg,
            longitudes: GrahaLongitudes { longitudes },
            retrograde: [false, false, false, false, false, false, true, true, true],
        }
    }

    fn table() -> AttributeTable {
        AttributeTable::standard().unwrap()
    }

    #[test]
    fn d1_houses_from_ascendant() {
        // Ascendant in Simha (4); Sun in Mithuna (2) → house 11
        let n = natal(130.0, [81.5, 200.0, 10.0, 70.0, 215.0, 40.0, 300.0, 250.0, 70.0]);
        let chart = rashi_chart(&table(), &n).unwrap();
        assert_eq!(chart.variant, ChartVariant::Rashi);
        assert_eq!(chart.planets.len(), 10);
        assert_eq!(chart.ascendant.house, 1);
        assert_eq!(chart.ascendant.sign_name, "Simha");
        assert_eq!(chart.ascendant.sign_lord, Graha::Surya);
        let sun = chart.planet(Graha::Surya).unwrap();
        assert_eq!(sun.sign_index, 2);
        assert_eq!(sun.house, 11);
        assert_eq!(sun.nakshatra_name, "Punarvasu");
        assert_eq!(sun.nakshatra_lord, Graha::Guru);
        assert_eq!(sun.dms, "21° 30' 00\"");
        assert!(chart.planet(Graha::Shani).unwrap().is_retrograde);
    }

    #[test]
    fn houses_list_occupants() {
        let n = natal(130.0, [81.5, 200.0, 10.0, 70.0, 215.0, 40.0, 300.0, 250.0, 70.0]);
        let chart = rashi_chart(&table(), &n).unwrap();
        assert_eq!(chart.houses.len(), 12);
        assert_eq!(chart.houses[0].sign_index, 4);
        assert_eq!(chart.houses[0].occupants, vec![ASCENDANT_NAME]);
        // Mithuna holds Sun, Mercury and Ketu
        assert_eq!(chart.houses[10].occupants, vec!["Sun", "Mercury", "Ketu"]);
        let total: usize = chart.houses.iter().map(|h| h.occupants.len()).sum();
        assert_eq!(total, 10);
    }

    #[test]
    fn moon_chart_puts_moon_first() {
        let n = natal(130.0, [81.5, 200.0, 10.0, 70.0, 215.0, 40.0, 300.0, 250.0, 70.0]);
        let chart = moon_chart(&table(), &n).unwrap();
        assert_eq!(chart.variant, ChartVariant::MoonChart);
        assert_eq!(chart.planet(Graha::Chandra).unwrap().house, 1);
        // Moon in Tula (6), Jupiter in Vrischika (7) → house 2
        assert_eq!(chart.planet(Graha::Guru).unwrap().house, 2);
        // Ascendant in Simha → house 11
        assert_eq!(chart.ascendant.house, 11);
    }

    #[test]
    fn navamsha_chart() {
        // Ascendant 0° Mesha → D9 Mesha; Sun 81.5° (Mithuna 21.5°) → Tula + 6 = Mesha
        let n = natal(0.0, [81.5, 200.0, 10.0, 70.0, 215.0, 40.0, 300.0, 250.0, 70.0]);
        let chart = divisional_chart(&table(), &n, 9).unwrap();
        assert_eq!(chart.variant.name(), "D9");
        assert_eq!(chart.planets[0].sign_index, 0);
        assert_eq!(chart.planets[0].house, 1);
        let sun = chart.planet(Graha::Surya).unwrap();
        assert_eq!(sun.sign_index, 0);
        assert_eq!(sun.house, 1);
    }

    #[test]
    fn bad_divisor_rejected() {
        let n = natal(0.0, [0.0; 9]);
        assert!(divisional_chart(&table(), &n, 0).is_err());
        assert!(divisional_chart(&table(), &n, 301).is_err());
    }

    #[test]
    fn nodes_from_mean_node_polynomial() {
        let eph = kundali_ephem::AnalyticEphemeris::new();
        let here = GeoLocation::new(26.8, 80.9);
        let model = AyanamshaModel::LahiriPolynomial;
        let jd = 2_449_540.986;
        let t = jd_to_centuries(jd);
        let rahu = graha_sidereal_longitude(&eph, Graha::Rahu, jd, &here, model).unwrap();
        let ketu = graha_sidereal_longitude(&eph, Graha::Ketu, jd, &here, model).unwrap();
        assert!((rahu - model.to_sidereal(mean_rahu_deg(t), jd)).abs() < 1e-9);
        assert!((ketu - model.to_sidereal(mean_ketu_deg(t), jd)).abs() < 1e-9);
        assert!((normalize_360(ketu - rahu) - 180.0).abs() < 1e-9);
    }
}
