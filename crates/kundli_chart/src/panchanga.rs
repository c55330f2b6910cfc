//! Panchanga elements at a single moment.
//!
//! Tithi and karana come from the Moon-minus-Sun elongation, yoga from the
//! Moon-plus-Sun sum, and the moon sign/nakshatra/pada from the Moon alone.
//! Both inputs must already be sidereal.

use kundli_vedic_base::{
    karana_from_elongation, nakshatra_from_longitude, normalize_360, rashi_from_longitude,
    tithi_from_elongation, yoga_from_sum,
};

use crate::chart_types::PanchangaRecord;

/// Moon-minus-Sun elongation in [0, 360).
pub fn elongation(sun_sid_deg: f64, moon_sid_deg: f64) -> f64 {
    normalize_360(moon_sid_deg - sun_sid_deg)
}

/// Moon-plus-Sun sum in [0, 360).
pub fn sidereal_sum(sun_sid_deg: f64, moon_sid_deg: f64) -> f64 {
    normalize_360(moon_sid_deg + sun_sid_deg)
}

/// Derive the panchanga from sidereal Sun and Moon longitudes.
pub fn derive_panchanga(sun_sid_deg: f64, moon_sid_deg: f64) -> PanchangaRecord {
    let elong = elongation(sun_sid_deg, moon_sid_deg);
    let tithi = tithi_from_elongation(elong);
    let yoga = yoga_from_sum(sidereal_sum(sun_sid_deg, moon_sid_deg));
    let karana = karana_from_elongation(elong);
    let moon_rashi = rashi_from_longitude(moon_sid_deg);
    let moon_nak = nakshatra_from_longitude(moon_sid_deg);

    PanchangaRecord {
        paksha: tithi.paksha,
        tithi: tithi.tithi,
        tithi_name: tithi.tithi.name_in(tithi.paksha),
        tithi_number: tithi.tithi_number,
        yoga: yoga.yoga,
        yoga_number: yoga.yoga_number,
        karana: karana.karana,
        karana_number: karana.karana_number,
        moon_sign: moon_rashi.rashi,
        nakshatra: moon_nak.nakshatra,
        pada: moon_nak.pada,
    }
}
