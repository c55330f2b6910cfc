//! Rashi (zodiac sign) classification.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Mesha (Aries) at 0 deg. Given a sidereal longitude we
//! identify which rashi the point falls in and how far into it the point is.

use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::VedicError;
use crate::util::normalize_360;

/// Span of one rashi in degrees.
pub const RASHI_SPAN: f64 = 30.0;

/// Sidereal zodiac sign. Discriminants follow zodiac order from Mesha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// Signs in zodiac order.
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi. This is the name charts report.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// Position in [`ALL_RASHIS`].
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rashi for a 0-based index; wraps modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_RASHIS[(index % 12) as usize]
    }
}

impl FromStr for Rashi {
    type Err = VedicError;

    /// Accepts either the Sanskrit or the western name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ALL_RASHIS
            .iter()
            .copied()
            .find(|r| {
                r.name().eq_ignore_ascii_case(needle) || r.western_name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| VedicError::UnknownName {
                table: "rashi",
                name: s.to_string(),
            })
    }
}

impl Serialize for Rashi {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.western_name())
    }
}

/// Where a longitude lands in the zodiac.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiInfo {
    pub rashi: Rashi,
    /// Same as `rashi.index()`.
    pub rashi_index: u8,
    /// Offset from the start of the sign, [0, 30).
    pub degrees_in_rashi: f64,
}

/// Sign containing a sidereal longitude. Any real input is accepted and
/// wrapped into [0, 360) first.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let sign = (lon / RASHI_SPAN) as u8;
    // 359.99999... can round up to 12 after division.
    let sign = if sign > 11 { 11 } else { sign };

    RashiInfo {
        rashi: Rashi::from_index(sign),
        rashi_index: sign,
        degrees_in_rashi: lon - f64::from(sign) * RASHI_SPAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_matches_index() {
        for (i, r) in ALL_RASHIS.into_iter().enumerate() {
            assert_eq!(usize::from(r.index()), i);
            assert_eq!(Rashi::from_index(r.index()), r);
        }
        assert_eq!(Rashi::from_index(12), Rashi::Mesha);
        assert_eq!(Rashi::from_index(23), Rashi::Meena);
    }

    #[test]
    fn each_sign_starts_on_a_multiple_of_30() {
        for r in ALL_RASHIS {
            let start = f64::from(r.index()) * RASHI_SPAN;
            assert_eq!(rashi_from_longitude(start).rashi, r);
            assert_eq!(rashi_from_longitude(start + 29.9).rashi, r);
        }
    }

    #[test]
    fn offset_within_sign() {
        let info = rashi_from_longitude(137.25);
        assert_eq!(info.rashi, Rashi::Simha);
        assert_eq!(info.rashi_index, 4);
        assert!((info.degrees_in_rashi - 17.25).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_input_wraps() {
        assert_eq!(rashi_from_longitude(392.0).rashi, Rashi::Vrishabha);
        let behind = rashi_from_longitude(-45.0);
        assert_eq!(behind.rashi, Rashi::Kumbha);
        assert!((behind.degrees_in_rashi - 15.0).abs() < 1e-9);
    }

    #[test]
    fn parse_both_names() {
        assert_eq!("Aries".parse::<Rashi>(), Ok(Rashi::Mesha));
        assert_eq!(" kumbha ".parse::<Rashi>(), Ok(Rashi::Kumbha));
        assert!("Ophiuchus".parse::<Rashi>().is_err());
    }

    #[test]
    fn serializes_as_western_name() {
        let json = serde_json::to_string(&Rashi::Vrischika).unwrap();
        assert_eq!(json, "\"Scorpio\"");
    }
}
