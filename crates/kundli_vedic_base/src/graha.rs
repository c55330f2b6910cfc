//! The nine grahas and sign rulership.
//!
//! Discriminant order is the order planets appear in a chart: luminaries,
//! inner planets, outer planets, lunar nodes.

use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::VedicError;
use crate::rashi::Rashi;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub enum Graha {
    Surya,
    Chandra,
    Buddh,
    Shukra,
    Mangal,
    Guru,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in reporting order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Buddh,
    Graha::Shukra,
    Graha::Mangal,
    Graha::Guru,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The 8 grahas an ephemeris is queried for. Ketu is always derived from Rahu.
pub const EPHEMERIS_GRAHAS: [Graha; 8] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Buddh,
    Graha::Shukra,
    Graha::Mangal,
    Graha::Guru,
    Graha::Shani,
    Graha::Rahu,
];

impl Graha {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Buddh => "Buddh",
            Self::Shukra => "Shukra",
            Self::Mangal => "Mangal",
            Self::Guru => "Guru",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Name used in chart output.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Buddh => "Mercury",
            Self::Shukra => "Venus",
            Self::Mangal => "Mars",
            Self::Guru => "Jupiter",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Slot in [`ALL_GRAHAS`]; also valid for [`EPHEMERIS_GRAHAS`] except Ketu.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Whether this graha is one of the lunar nodes.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    /// Whether this graha is one of the two luminaries.
    pub const fn is_luminary(self) -> bool {
        matches!(self, Self::Surya | Self::Chandra)
    }
}

impl FromStr for Graha {
    type Err = VedicError;

    /// Accepts English or Sanskrit names, case-insensitively. Ephemeris labels
    /// for the ascending node ("True Node", "Mean Node") map to Rahu.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        if needle.eq_ignore_ascii_case("true node") || needle.eq_ignore_ascii_case("mean node") {
            return Ok(Self::Rahu);
        }
        ALL_GRAHAS
            .iter()
            .copied()
            .find(|g| {
                g.english_name().eq_ignore_ascii_case(needle) || g.name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| VedicError::UnknownName {
                table: "graha",
                name: s.to_string(),
            })
    }
}

impl TryFrom<String> for Graha {
    type Error = VedicError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for Graha {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.english_name())
    }
}

/// Ruler of a sign. The luminaries rule one sign each, the five tara
/// grahas two each, and the nodes none.
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha => Graha::Mangal,
        Rashi::Vrishabha => Graha::Shukra,
        Rashi::Mithuna => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Kanya => Graha::Buddh,
        Rashi::Tula => Graha::Shukra,
        Rashi::Vrischika => Graha::Mangal,
        Rashi::Dhanu => Graha::Guru,
        Rashi::Makara => Graha::Shani,
        Rashi::Kumbha => Graha::Shani,
        Rashi::Meena => Graha::Guru,
    }
}
