//! Inputs to chart derivation: the caller's birth data and the values the
//! external collaborators resolved for it.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use kundli_vedic_base::{EPHEMERIS_GRAHAS, Graha, normalize_360};
use serde::{Deserialize, Serialize};

use crate::error::KundliError;

/// Birth date format accepted in [`BirthInput::date`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Birth time format accepted in [`BirthInput::time`].
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Birth data as supplied by the caller. The place is free text resolved
/// by a [`GeoTimeResolver`](crate::provider::GeoTimeResolver).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthInput {
    /// Local civil date, `YYYY-MM-DD`.
    pub date: String,
    /// Local civil time, `HH:MM:SS`.
    pub time: String,
    pub place: String,
}

impl BirthInput {
    pub fn new(date: impl Into<String>, time: impl Into<String>, place: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            place: place.into(),
        }
    }

    /// Parse date and time into a naive local date-time.
    pub fn local_datetime(&self) -> Result<NaiveDateTime, KundliError> {
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).map_err(|e| {
            KundliError::InvalidInput(format!("birth date {:?}: {e}", self.date))
        })?;
        let time = NaiveTime::parse_from_str(self.time.trim(), TIME_FORMAT).map_err(|e| {
            KundliError::InvalidInput(format!("birth time {:?}: {e}", self.time))
        })?;
        Ok(date.and_time(time))
    }
}

/// Coordinates and timezone resolved for a place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
    /// IANA timezone identifier, e.g. `Asia/Kolkata`.
    pub timezone: String,
}

/// Location and time context resolved once per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoTimeContext {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    /// Birth instant in UTC.
    pub utc: DateTime<Utc>,
    /// Continuous astronomical time (Julian Day, UT).
    pub julian_day: f64,
}

impl GeoTimeContext {
    pub fn new(location: GeoLocation, utc: DateTime<Utc>, julian_day: f64) -> Self {
        Self {
            latitude: location.latitude,
            longitude: location.longitude,
            timezone: location.timezone,
            utc,
            julian_day,
        }
    }
}

/// Ecliptic longitude and its rate for one body.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BodyState {
    /// Ecliptic longitude in degrees (tropical).
    pub longitude: f64,
    /// Longitude rate in degrees/day. Negative means retrograde motion.
    pub speed: f64,
}

impl BodyState {
    pub const fn new(longitude: f64, speed: f64) -> Self {
        Self { longitude, speed }
    }
}

/// Sunrise and sunset as local time-of-day. Either may be absent when the
/// ephemeris cannot compute it (e.g. polar day or night).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RiseSet {
    #[serde(default)]
    pub sunrise: Option<NaiveTime>,
    #[serde(default)]
    pub sunset: Option<NaiveTime>,
}

/// Raw ephemeris output for one instant.
///
/// Holds the 8 queried bodies in [`EPHEMERIS_GRAHAS`] order. Ketu is never
/// stored: it is always Rahu + 180 deg.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "SnapshotRepr")]
pub struct EphemerisSnapshot {
    bodies: [BodyState; 8],
    /// Sunrise/sunset lookup for the birth day.
    pub rise_set: RiseSet,
}

impl EphemerisSnapshot {
    /// Build from states indexed like [`EPHEMERIS_GRAHAS`].
    pub const fn new(bodies: [BodyState; 8], rise_set: RiseSet) -> Self {
        Self { bodies, rise_set }
    }

    /// Build by calling `f` once per queried graha.
    pub fn from_fn(mut f: impl FnMut(Graha) -> BodyState, rise_set: RiseSet) -> Self {
        let mut bodies = [BodyState::default(); 8];
        for g in EPHEMERIS_GRAHAS {
            bodies[g.index() as usize] = f(g);
        }
        Self { bodies, rise_set }
    }

    /// State of any of the 9 grahas; Ketu is derived from Rahu.
    pub fn state(&self, graha: Graha) -> BodyState {
        match graha {
            Graha::Ketu => {
                let rahu = self.bodies[Graha::Rahu.index() as usize];
                BodyState::new(normalize_360(rahu.longitude + 180.0), rahu.speed)
            }
            g => self.bodies[g.index() as usize],
        }
    }

    pub fn longitude(&self, graha: Graha) -> f64 {
        self.state(graha).longitude
    }

    pub(crate) fn check_finite(&self) -> Result<(), KundliError> {
        for g in EPHEMERIS_GRAHAS {
            let s = self.bodies[g.index() as usize];
            if !s.longitude.is_finite() || !s.speed.is_finite() {
                return Err(KundliError::InvalidInput(format!(
                    "non-finite ephemeris value for {}",
                    g.english_name()
                )));
            }
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct SnapshotRepr {
    bodies: BTreeMap<Graha, BodyState>,
    #[serde(default)]
    rise_set: RiseSet,
}

impl TryFrom<SnapshotRepr> for EphemerisSnapshot {
    type Error = KundliError;

    fn try_from(repr: SnapshotRepr) -> Result<Self, Self::Error> {
        if repr.bodies.contains_key(&Graha::Ketu) {
            return Err(KundliError::InvalidInput(
                "Ketu is derived from Rahu and must not be supplied".into(),
            ));
        }
        let mut bodies = [BodyState::default(); 8];
        for g in EPHEMERIS_GRAHAS {
            bodies[g.index() as usize] = *repr.bodies.get(&g).ok_or_else(|| {
                KundliError::InvalidInput(format!("missing ephemeris body {}", g.english_name()))
            })?;
        }
        let snapshot = Self::new(bodies, repr.rise_set);
        snapshot.check_finite()?;
        Ok(snapshot)
    }
}

/// House division method requested from the ephemeris.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseMethod {
    /// Equal houses: each house spans exactly 30 degrees from the ascendant.
    #[default]
    Equal,
    /// Whole-sign houses: house 1 is the ascendant's sign.
    WholeSign,
    /// Placidus semi-arc division.
    Placidus,
    /// Koch: time-based division using MC-to-horizon.
    Koch,
    /// Porphyry (Sripati): trisect the four quadrant arcs.
    Porphyry,
    /// Regiomontanus: 30-degree equator arcs from East Point.
    Regiomontanus,
    /// Campanus: 30-degree prime vertical arcs.
    Campanus,
}

/// All house methods in declaration order.
pub const ALL_HOUSE_METHODS: [HouseMethod; 7] = [
    HouseMethod::Equal,
    HouseMethod::WholeSign,
    HouseMethod::Placidus,
    HouseMethod::Koch,
    HouseMethod::Porphyry,
    HouseMethod::Regiomontanus,
    HouseMethod::Campanus,
];

impl HouseMethod {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::WholeSign => "whole_sign",
            Self::Placidus => "placidus",
            Self::Koch => "koch",
            Self::Porphyry => "porphyry",
            Self::Regiomontanus => "regiomontanus",
            Self::Campanus => "campanus",
        }
    }
}

impl Display for HouseMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HouseMethod {
    type Err = KundliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().replace('-', "_");
        ALL_HOUSE_METHODS
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(&needle))
            .ok_or_else(|| KundliError::InvalidInput(format!("unknown house method: {s:?}")))
    }
}

/// House cusps for one house-division method. House 1's cusp is the
/// ascendant by convention, but both are carried as the ephemeris reported them.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "HouseSystemRepr")]
pub struct HouseSystem {
    /// Cusp longitudes for houses 1..12 (tropical degrees).
    pub cusps: [f64; 12],
    /// Ascendant longitude (tropical degrees).
    pub ascendant: f64,
}

impl HouseSystem {
    pub const fn new(cusps: [f64; 12], ascendant: f64) -> Self {
        Self { cusps, ascendant }
    }

    /// Build from a slice, rejecting anything other than exactly 12 finite cusps.
    pub fn from_cusps(cusps: &[f64], ascendant: f64) -> Result<Self, KundliError> {
        let cusps: [f64; 12] = cusps.try_into().map_err(|_| {
            KundliError::InvalidInput(format!("expected 12 house cusps, got {}", cusps.len()))
        })?;
        if !ascendant.is_finite() || cusps.iter().any(|c| !c.is_finite()) {
            return Err(KundliError::InvalidInput(
                "non-finite house cusp or ascendant".into(),
            ));
        }
        Ok(Self { cusps, ascendant })
    }

    /// Equal houses of 30 degrees starting at the ascendant.
    pub fn equal_from_ascendant(ascendant: f64) -> Self {
        let mut cusps = [0.0; 12];
        for (i, cusp) in cusps.iter_mut().enumerate() {
            *cusp = normalize_360(ascendant + 30.0 * i as f64);
        }
        Self { cusps, ascendant }
    }
}

#[derive(Deserialize)]
struct HouseSystemRepr {
    cusps: Vec<f64>,
    ascendant: f64,
}

impl TryFrom<HouseSystemRepr> for HouseSystem {
    type Error = KundliError;

    fn try_from(repr: HouseSystemRepr) -> Result<Self, Self::Error> {
        Self::from_cusps(&repr.cusps, repr.ascendant)
    }
}
