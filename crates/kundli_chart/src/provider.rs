//! Contracts for the external collaborators the request pipeline drives.
//!
//! Geocoding, timezone lookup, civil-to-UTC conversion and the ephemeris
//! itself live outside this crate. Implementations report failures as
//! [`CollaboratorError`] kinds, which the pipeline propagates unchanged.

use chrono::{DateTime, NaiveDateTime, Utc};
use kundli_vedic_base::{EPHEMERIS_GRAHAS, Graha};
use tracing::debug;

use crate::error::CollaboratorError;
use crate::input_types::{BodyState, EphemerisSnapshot, GeoLocation, HouseMethod, HouseSystem, RiseSet};
use crate::julian::julian_day_ut;

/// Resolves places to coordinates and local civil time to UTC.
pub trait GeoTimeResolver {
    /// Geocode a free-text place name and find its timezone.
    ///
    /// Fails with [`CollaboratorError::PlaceNotFound`] or
    /// [`CollaboratorError::TimezoneNotFound`].
    fn resolve(&self, place: &str) -> Result<GeoLocation, CollaboratorError>;

    /// Convert a local civil date-time in `timezone` to UTC.
    fn to_utc(
        &self,
        local: NaiveDateTime,
        timezone: &str,
    ) -> Result<DateTime<Utc>, CollaboratorError>;

    /// Continuous astronomical time for a UTC instant. Defaults to Julian Day (UT).
    fn astronomical_time(&self, utc: &DateTime<Utc>) -> f64 {
        julian_day_ut(utc)
    }
}

/// Source of raw geocentric positions and house cusps.
pub trait EphemerisProvider {
    /// Tropical ecliptic longitude (deg) and its rate (deg/day) of `graha`.
    ///
    /// Only called for [`EPHEMERIS_GRAHAS`]; Ketu is never queried.
    fn longitude_and_speed(&self, graha: Graha, jd: f64) -> Result<BodyState, CollaboratorError>;

    /// Twelve tropical cusps and the ascendant for a location.
    fn houses(
        &self,
        jd: f64,
        latitude: f64,
        longitude: f64,
        method: HouseMethod,
    ) -> Result<HouseSystem, CollaboratorError>;

    /// Ayanamsa (deg) at `jd`.
    fn ayanamsa(&self, jd: f64) -> Result<f64, CollaboratorError>;

    /// Sunrise and sunset for the day containing `jd`. Absent values mean
    /// the event does not occur or could not be computed; this is not an error.
    fn sunrise_sunset(&self, jd: f64, longitude: f64, latitude: f64) -> RiseSet;
}

/// Query every ephemeris body plus sunrise/sunset into one snapshot.
pub fn query_snapshot<E: EphemerisProvider + ?Sized>(
    ephemeris: &E,
    jd: f64,
    latitude: f64,
    longitude: f64,
) -> Result<EphemerisSnapshot, CollaboratorError> {
    let mut bodies = [BodyState::default(); 8];
    for graha in EPHEMERIS_GRAHAS {
        let state = ephemeris.longitude_and_speed(graha, jd)?;
        debug!(
            graha = graha.english_name(),
            longitude = state.longitude,
            speed = state.speed,
            "queried body"
        );
        bodies[graha.index() as usize] = state;
    }
    let rise_set = ephemeris.sunrise_sunset(jd, longitude, latitude);
    Ok(EphemerisSnapshot::new(bodies, rise_set))
}
