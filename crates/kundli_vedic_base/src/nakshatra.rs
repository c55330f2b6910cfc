//! Lunar mansions: 27 equal divisions of the sidereal zodiac, each split
//! into 4 padas. Ashwini begins at 0 deg sidereal.

use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::VedicError;
use crate::util::normalize_360;

/// Width of a nakshatra in degrees (13 deg 20').
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// Width of a pada in degrees (3 deg 20').
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

/// One of the 27 nakshatras, Ashwini first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashirsha,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// Nakshatras in zodiac order.
pub const ALL_NAKSHATRAS_27: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashirsha,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Name as printed in charts; compound names are space separated.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashirsha => "Mrigashirsha",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl FromStr for Nakshatra {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ALL_NAKSHATRAS_27
            .iter()
            .copied()
            .find(|n| n.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| VedicError::UnknownName {
                table: "nakshatra",
                name: s.to_string(),
            })
    }
}

impl Serialize for Nakshatra {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Nakshatra and pada for a longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    pub nakshatra_index: u8,
    /// Quarter, 1-4.
    pub pada: u8,
    /// Offset from the start of the nakshatra, [0, 13.333...).
    pub degrees_in_nakshatra: f64,
}

/// Nakshatra and pada containing a sidereal longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let idx = ((lon / NAKSHATRA_SPAN_27) as u8).min(26);
    let offset = lon - f64::from(idx) * NAKSHATRA_SPAN_27;
    // Residue at a boundary can leave `offset` a hair past the 4th pada.
    let quarter = ((offset / PADA_SPAN) as u8).min(3);

    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS_27[usize::from(idx)],
        nakshatra_index: idx,
        pada: quarter + 1,
        degrees_in_nakshatra: offset,
    }
}
