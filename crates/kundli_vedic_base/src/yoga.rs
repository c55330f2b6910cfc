//! Luni-solar yoga classification.
//!
//! Yoga = which of 27 segments of (Moon_sid + Sun_sid) mod 360
//! (13 deg 20' each) a moment falls in.

use serde::{Serialize, Serializer};

use crate::nakshatra::NAKSHATRA_SPAN_27;
use crate::util::normalize_360;

/// Span of one yoga segment in degrees (same as a nakshatra).
pub const YOGA_SEGMENT_DEG: f64 = NAKSHATRA_SPAN_27;

/// The 27 yogas from Vishkambha to Vaidhriti.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Yoga {
    Vishkambha,
    Priti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarman,
    Dhriti,
    Shoola,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyana,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

/// All 27 yogas in order.
pub const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkambha,
    Yoga::Priti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarman,
    Yoga::Dhriti,
    Yoga::Shoola,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyana,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

impl Yoga {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vishkambha => "Vishkambha",
            Self::Priti => "Priti",
            Self::Ayushman => "Ayushman",
            Self::Saubhagya => "Saubhagya",
            Self::Shobhana => "Shobhana",
            Self::Atiganda => "Atiganda",
            Self::Sukarman => "Sukarman",
            Self::Dhriti => "Dhriti",
            Self::Shoola => "Shoola",
            Self::Ganda => "Ganda",
            Self::Vriddhi => "Vriddhi",
            Self::Dhruva => "Dhruva",
            Self::Vyaghata => "Vyaghata",
            Self::Harshana => "Harshana",
            Self::Vajra => "Vajra",
            Self::Siddhi => "Siddhi",
            Self::Vyatipata => "Vyatipata",
            Self::Variyana => "Variyana",
            Self::Parigha => "Parigha",
            Self::Shiva => "Shiva",
            Self::Siddha => "Siddha",
            Self::Sadhya => "Sadhya",
            Self::Shubha => "Shubha",
            Self::Shukla => "Shukla",
            Self::Brahma => "Brahma",
            Self::Indra => "Indra",
            Self::Vaidhriti => "Vaidhriti",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl Serialize for Yoga {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Yoga classification of one sidereal sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YogaPosition {
    pub yoga: Yoga,
    /// 1-based yoga number (1-27).
    pub yoga_number: u8,
}

/// Classify (Moon_sid + Sun_sid) in degrees, any range, into a yoga.
pub fn yoga_from_sum(sidereal_sum_deg: f64) -> YogaPosition {
    let s = normalize_360(sidereal_sum_deg);
    let idx = ((s / YOGA_SEGMENT_DEG).floor() as u8).min(26);
    YogaPosition {
        yoga: ALL_YOGAS[(idx % 27) as usize],
        yoga_number: idx + 1,
    }
}
