//! Types for the derived natal chart.

use chrono::NaiveTime;
use kundli_vedic_base::{
    ASPECT_ORB_DEG, COMBUSTION_ORB_DEG, Dignity, Graha, Karana, Nakshatra, Paksha, Rashi, Tithi,
    Yoga,
};
use serde::{Deserialize, Serialize, Serializer};

use crate::input_types::{
    BirthInput, EphemerisSnapshot, GeoTimeContext, HouseMethod, HouseSystem,
};

/// Default conjunction orb: maximum degree-within-sign difference.
pub const CONJUNCTION_ORB_DEG: f64 = 8.0;

/// Tunables for chart derivation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// House method requested from the ephemeris by the request pipeline.
    pub house_method: HouseMethod,
    /// Same-sign degree difference below which two grahas are conjunct.
    pub conjunction_orb_deg: f64,
    /// Tolerance when matching opposition and special aspect angles.
    pub aspect_orb_deg: f64,
    /// Distance from the Sun below which a tara graha is combust.
    pub combustion_orb_deg: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            house_method: HouseMethod::Equal,
            conjunction_orb_deg: CONJUNCTION_ORB_DEG,
            aspect_orb_deg: ASPECT_ORB_DEG,
            combustion_orb_deg: COMBUSTION_ORB_DEG,
        }
    }
}

/// A fully resolved derivation request, e.g. read from a JSON file.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartRequest {
    pub birth: BirthInput,
    pub context: GeoTimeContext,
    pub snapshot: EphemerisSnapshot,
    pub houses: HouseSystem,
    /// Ayanamsa in degrees, subtracted from every tropical longitude.
    pub ayanamsa: f64,
    #[serde(default)]
    pub config: ChartConfig,
}

/// Ascendant (lagna) placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AscendantRecord {
    pub sign: Rashi,
    /// Sidereal longitude of the ascendant [0, 360).
    pub degree: f64,
    pub degree_in_sign: f64,
}

/// One house cusp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HouseRecord {
    /// House number, 1-12.
    pub number: u8,
    /// Sidereal cusp longitude [0, 360).
    pub cusp_degree: f64,
    pub sign: Rashi,
    /// Lord of the cusp sign.
    pub lord: Graha,
}

/// One graha's placement and condition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetRecord {
    #[serde(rename = "name")]
    pub graha: Graha,
    /// Sidereal longitude [0, 360).
    pub longitude: f64,
    pub sign: Rashi,
    /// House number, 1-12.
    pub house: u8,
    pub degree_in_sign: f64,
    pub nakshatra: Nakshatra,
    /// Pada, 1-4.
    pub pada: u8,
    pub dignity: Dignity,
    pub retrograde: bool,
    pub combust: bool,
}

/// Aspect type between two grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AspectKind {
    /// Generic 7th-house aspect (shortest arc near 180 deg).
    Opposition,
    /// Graha-specific aspect at a separation of `angle` degrees.
    Special { graha: Graha, angle: u16 },
}

impl AspectKind {
    pub fn label(self) -> String {
        match self {
            Self::Opposition => "Opposition (7th aspect)".to_string(),
            Self::Special { graha, angle } => {
                format!("{} {angle}\u{b0} aspect", graha.english_name())
            }
        }
    }
}

impl Serialize for AspectKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

/// Directional aspect from one graha to another.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AspectRecord {
    pub from: Graha,
    pub to: Graha,
    #[serde(rename = "type")]
    pub kind: AspectKind,
}

/// Two grahas close together in the same sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConjunctionRecord {
    pub planets: [Graha; 2],
    pub sign: Rashi,
}

/// Vedic calendar elements at birth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanchangaRecord {
    pub paksha: Paksha,
    #[serde(skip)]
    pub tithi: Tithi,
    /// Tithi name resolved for the paksha (Purnima or Amavasya for the 15th).
    #[serde(rename = "tithi")]
    pub tithi_name: &'static str,
    /// Tithi number across the month, 1-30.
    pub tithi_number: u8,
    pub yoga: Yoga,
    pub yoga_number: u8,
    pub karana: Karana,
    pub karana_number: u8,
    pub moon_sign: Rashi,
    pub nakshatra: Nakshatra,
    pub pada: u8,
}

/// The complete derived natal chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NatalChart {
    pub input: BirthInput,
    pub context: GeoTimeContext,
    pub ascendant: AscendantRecord,
    pub houses: Vec<HouseRecord>,
    pub planets: Vec<PlanetRecord>,
    pub ayanamsa: f64,
    pub moon_sign: Rashi,
    pub nakshatra: Nakshatra,
    /// Moon's pada.
    pub charan: u8,
    pub panchanga: PanchangaRecord,
    pub sunrise: Option<NaiveTime>,
    pub sunset: Option<NaiveTime>,
    pub aspects: Vec<AspectRecord>,
    pub conjunctions: Vec<ConjunctionRecord>,
}

impl NatalChart {
    /// Record for a specific graha.
    pub fn planet(&self, graha: Graha) -> Option<&PlanetRecord> {
        self.planets.iter().find(|p| p.graha == graha)
    }

    /// Record for house `number` (1-12).
    pub fn house(&self, number: u8) -> Option<&HouseRecord> {
        self.houses.iter().find(|h| h.number == number)
    }
}
