//! Natal chart assembly.
//!
//! [`derive_chart`] is the pure core: resolved context plus raw ephemeris in,
//! [`NatalChart`] out. [`compute_kundli`] drives the collaborators to build
//! those inputs from a bare [`BirthInput`] first.

use chrono::{NaiveTime, Timelike};
use kundli_vedic_base::Graha;
use tracing::{debug, info, warn};

use crate::aspects::{find_aspects, find_conjunctions};
use crate::chart::{ascendant_record, house_records, planet_records, sidereal_cusps, to_sidereal};
use crate::chart_types::{ChartConfig, ChartRequest, NatalChart};
use crate::error::KundliError;
use crate::input_types::{BirthInput, EphemerisSnapshot, GeoTimeContext, HouseSystem};
use crate::panchanga::derive_panchanga;
use crate::provider::{EphemerisProvider, GeoTimeResolver, query_snapshot};

/// Derive a natal chart with default orbs.
pub fn derive_chart(
    birth: &BirthInput,
    context: &GeoTimeContext,
    snapshot: &EphemerisSnapshot,
    houses: &HouseSystem,
    ayanamsa: f64,
) -> Result<NatalChart, KundliError> {
    derive_chart_with_config(
        birth,
        context,
        snapshot,
        houses,
        ayanamsa,
        &ChartConfig::default(),
    )
}

/// Derive a natal chart.
///
/// All longitudes in `snapshot` and `houses` are tropical; `ayanamsa` is
/// subtracted from each before classification. Fails only on malformed
/// input: unparseable birth date/time or non-finite numbers.
pub fn derive_chart_with_config(
    birth: &BirthInput,
    context: &GeoTimeContext,
    snapshot: &EphemerisSnapshot,
    houses: &HouseSystem,
    ayanamsa: f64,
    config: &ChartConfig,
) -> Result<NatalChart, KundliError> {
    birth.local_datetime()?;
    if !ayanamsa.is_finite() {
        return Err(KundliError::InvalidInput(format!(
            "non-finite ayanamsa {ayanamsa}"
        )));
    }
    snapshot.check_finite()?;
    if !houses.ascendant.is_finite() || houses.cusps.iter().any(|c| !c.is_finite()) {
        return Err(KundliError::InvalidInput(
            "non-finite house cusp or ascendant".into(),
        ));
    }

    let asc_sid = to_sidereal(houses.ascendant, ayanamsa);
    let cusps = sidereal_cusps(houses, ayanamsa);
    let planets = planet_records(snapshot, &cusps, ayanamsa, config);

    let sun_sid = to_sidereal(snapshot.longitude(Graha::Surya), ayanamsa);
    let moon_sid = to_sidereal(snapshot.longitude(Graha::Chandra), ayanamsa);
    let panchanga = derive_panchanga(sun_sid, moon_sid);

    let aspects = find_aspects(&planets, config.aspect_orb_deg);
    let conjunctions = find_conjunctions(&planets, config.conjunction_orb_deg);
    debug!(
        aspects = aspects.len(),
        conjunctions = conjunctions.len(),
        "aspect scan complete"
    );

    if snapshot.rise_set.sunrise.is_none() || snapshot.rise_set.sunset.is_none() {
        warn!(
            latitude = context.latitude,
            longitude = context.longitude,
            "sunrise or sunset unavailable"
        );
    }

    let ascendant = ascendant_record(asc_sid);
    info!(
        place = %birth.place,
        ascendant = ascendant.sign.western_name(),
        moon_sign = panchanga.moon_sign.western_name(),
        tithi = panchanga.tithi_number,
        "chart derived"
    );

    Ok(NatalChart {
        input: birth.clone(),
        context: context.clone(),
        ascendant,
        houses: house_records(&cusps),
        planets,
        ayanamsa,
        moon_sign: panchanga.moon_sign,
        nakshatra: panchanga.nakshatra,
        charan: panchanga.pada,
        panchanga,
        sunrise: snapshot.rise_set.sunrise.map(whole_seconds),
        sunset: snapshot.rise_set.sunset.map(whole_seconds),
        aspects,
        conjunctions,
    })
}

/// Derive a chart from a pre-resolved request.
pub fn derive_from_request(request: &ChartRequest) -> Result<NatalChart, KundliError> {
    derive_chart_with_config(
        &request.birth,
        &request.context,
        &request.snapshot,
        &request.houses,
        request.ayanamsa,
        &request.config,
    )
}

/// Full pipeline: resolve the place, convert to UTC, query the ephemeris,
/// then derive.
///
/// Collaborator failures propagate as [`KundliError::Collaborator`] with their
/// kind intact. Nothing is retried.
pub fn compute_kundli<R, E>(
    birth: &BirthInput,
    resolver: &R,
    ephemeris: &E,
    config: &ChartConfig,
) -> Result<NatalChart, KundliError>
where
    R: GeoTimeResolver + ?Sized,
    E: EphemerisProvider + ?Sized,
{
    let local = birth.local_datetime()?;
    let location = resolver.resolve(&birth.place)?;
    let utc = resolver.to_utc(local, &location.timezone)?;
    let jd = resolver.astronomical_time(&utc);
    debug!(
        place = %birth.place,
        latitude = location.latitude,
        longitude = location.longitude,
        timezone = %location.timezone,
        jd,
        "resolved birth context"
    );

    let ayanamsa = ephemeris.ayanamsa(jd)?;
    let houses = ephemeris.houses(jd, location.latitude, location.longitude, config.house_method)?;
    let snapshot = query_snapshot(ephemeris, jd, location.latitude, location.longitude)?;
    debug!(ayanamsa, method = %config.house_method, "ephemeris queried");

    let context = GeoTimeContext::new(location, utc, jd);
    derive_chart_with_config(birth, &context, &snapshot, &houses, ayanamsa, config)
}

fn whole_seconds(t: NaiveTime) -> NaiveTime {
    t.with_nanosecond(0).unwrap_or(t)
}
