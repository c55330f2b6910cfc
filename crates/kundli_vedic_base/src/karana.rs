//! Karana (half-tithi) classification.
//!
//! A karana is half of a tithi (6 degrees of elongation). The number is
//! taken from the position within the current tithi and mapped onto an
//! 11-name table with a uniform modulo-11 cycle. This does not reproduce
//! the traditional scheme, in which four fixed karanas sit at specific
//! tithi boundaries and the other seven repeat eight times per month.

use serde::{Serialize, Serializer};

use crate::tithi::TITHI_SEGMENT_DEG;
use crate::util::normalize_360;

/// Elongation span of one karana in degrees.
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

/// The 11 karana names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

/// All 11 karanas in table order.
pub const ALL_KARANAS: [Karana; 11] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
    Karana::Shakuni,
    Karana::Chatushpada,
    Karana::Naga,
    Karana::Kimstughna,
];

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garaja => "Garaja",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl Serialize for Karana {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Karana classification of one elongation value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KaranaPosition {
    pub karana: Karana,
    /// 1-based karana number.
    pub karana_number: u8,
}

/// Classify a Moon-minus-Sun elongation (degrees, any range) into a karana.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaPosition {
    let within_tithi = normalize_360(elongation_deg) % TITHI_SEGMENT_DEG;
    let karana_number = ((within_tithi / KARANA_SEGMENT_DEG).floor() as u8).min(1) + 1;
    KaranaPosition {
        karana: ALL_KARANAS[((karana_number - 1) % 11) as usize],
        karana_number,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_half_of_tithi() {
        let p = karana_from_elongation(3.0);
        assert_eq!(p.karana_number, 1);
        assert_eq!(p.karana, Karana::Bava);
    }

    #[test]
    fn second_half_of_tithi() {
        let p = karana_from_elongation(9.0);
        assert_eq!(p.karana_number, 2);
        assert_eq!(p.karana, Karana::Balava);
    }

    #[test]
    fn later_tithis_repeat_the_cycle() {
        assert_eq!(karana_from_elongation(123.0).karana, Karana::Bava);
        assert_eq!(karana_from_elongation(130.0).karana, Karana::Balava);
    }

    #[test]
    fn negative_elongation_wraps() {
        // -346 → 14 → 2 deg into tithi 2 → first half
        assert_eq!(karana_from_elongation(-346.0).karana_number, 1);
    }
}
