//! House and graha placement.
//!
//! Converts tropical ephemeris output to sidereal by subtracting the
//! ayanamsa, then classifies the ascendant, each house cusp and each of the
//! 9 grahas.

use kundli_vedic_base::{
    ALL_GRAHAS, Graha, dignity_in_rashi, is_combust_within, nakshatra_from_longitude,
    normalize_360, rashi_from_longitude, rashi_lord,
};

use crate::chart_types::{AscendantRecord, ChartConfig, HouseRecord, PlanetRecord};
use crate::input_types::{EphemerisSnapshot, HouseSystem};

/// Tropical longitude minus ayanamsa, normalized to [0, 360).
pub fn to_sidereal(tropical_deg: f64, ayanamsa_deg: f64) -> f64 {
    normalize_360(tropical_deg - ayanamsa_deg)
}

/// House containing `lon`: the cusp at or before it, cyclically.
///
/// Picks the cusp with the smallest `(lon - cusp) mod 360`. On ties the
/// lower house number wins.
pub fn house_of(lon: f64, cusps: &[f64; 12]) -> u8 {
    let mut best_house = 1u8;
    let mut best_diff = f64::INFINITY;
    for (i, &cusp) in cusps.iter().enumerate() {
        let diff = normalize_360(lon - cusp);
        if diff < best_diff {
            best_diff = diff;
            best_house = i as u8 + 1;
        }
    }
    best_house
}

/// Retrograde when the ephemeris rate is negative. The luminaries are never
/// retrograde and the nodes are not checked.
pub fn is_retrograde(graha: Graha, speed_deg_per_day: f64) -> bool {
    !graha.is_luminary() && !graha.is_node() && speed_deg_per_day < 0.0
}

/// Ascendant placement from a sidereal longitude.
pub fn ascendant_record(asc_sid_deg: f64) -> AscendantRecord {
    let info = rashi_from_longitude(asc_sid_deg);
    AscendantRecord {
        sign: info.rashi,
        degree: normalize_360(asc_sid_deg),
        degree_in_sign: info.degrees_in_rashi,
    }
}

/// Sidereal cusps of a tropical house system.
pub fn sidereal_cusps(houses: &HouseSystem, ayanamsa_deg: f64) -> [f64; 12] {
    houses.cusps.map(|c| to_sidereal(c, ayanamsa_deg))
}

/// House records 1..12 from sidereal cusps.
pub fn house_records(sid_cusps: &[f64; 12]) -> Vec<HouseRecord> {
    sid_cusps
        .iter()
        .enumerate()
        .map(|(i, &cusp)| {
            let rashi = rashi_from_longitude(cusp).rashi;
            HouseRecord {
                number: i as u8 + 1,
                cusp_degree: cusp,
                sign: rashi,
                lord: rashi_lord(rashi),
            }
        })
        .collect()
}

/// Planet records for all 9 grahas, in [`ALL_GRAHAS`] order.
pub fn planet_records(
    snapshot: &EphemerisSnapshot,
    sid_cusps: &[f64; 12],
    ayanamsa_deg: f64,
    config: &ChartConfig,
) -> Vec<PlanetRecord> {
    let sun_sid = to_sidereal(snapshot.longitude(Graha::Surya), ayanamsa_deg);

    ALL_GRAHAS
        .iter()
        .map(|&graha| {
            let state = snapshot.state(graha);
            let lon = to_sidereal(state.longitude, ayanamsa_deg);
            let rashi = rashi_from_longitude(lon);
            let nak = nakshatra_from_longitude(lon);
            PlanetRecord {
                graha,
                longitude: lon,
                sign: rashi.rashi,
                house: house_of(lon, sid_cusps),
                degree_in_sign: rashi.degrees_in_rashi,
                nakshatra: nak.nakshatra,
                pada: nak.pada,
                dignity: dignity_in_rashi(graha, rashi.rashi),
                retrograde: is_retrograde(graha, state.speed),
                combust: is_combust_within(graha, lon, sun_sid, config.combustion_orb_deg),
            }
        })
        .collect()
}
