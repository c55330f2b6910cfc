//! Tithi (lunar day) and paksha (lunar fortnight) classification.
//!
//! A tithi is one 12-degree step of Moon-minus-Sun elongation, giving 30
//! tithis per synodic month. Tithis 1-15 fall in Shukla (bright) paksha,
//! 16-30 in Krishna (dark) paksha. Both fortnights share one 15-name table;
//! the 15th name is Purnima (full moon) in Shukla and Amavasya (new moon)
//! in Krishna.

use serde::{Serialize, Serializer};

use crate::util::normalize_360;

/// Elongation span of one tithi in degrees.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    /// Bright (waxing) half.
    Shukla,
    /// Dark (waning) half.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }

    /// "bright" or "dark".
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Shukla => "bright",
            Self::Krishna => "dark",
        }
    }
}

impl Serialize for Paksha {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// The 15 tithi names shared by both pakshas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tithi {
    Pratipada,
    Dvitiya,
    Tritiya,
    Chaturthi,
    Panchami,
    Shashthi,
    Saptami,
    Ashtami,
    Navami,
    Dashami,
    Ekadashi,
    Dwadashi,
    Trayodashi,
    Chaturdashi,
    PurnimaAmavasya,
}

/// All 15 tithi names in order.
pub const ALL_TITHIS: [Tithi; 15] = [
    Tithi::Pratipada,
    Tithi::Dvitiya,
    Tithi::Tritiya,
    Tithi::Chaturthi,
    Tithi::Panchami,
    Tithi::Shashthi,
    Tithi::Saptami,
    Tithi::Ashtami,
    Tithi::Navami,
    Tithi::Dashami,
    Tithi::Ekadashi,
    Tithi::Dwadashi,
    Tithi::Trayodashi,
    Tithi::Chaturdashi,
    Tithi::PurnimaAmavasya,
];

impl Tithi {
    /// Table name. The 15th entry reads "Purnima/Amavasya".
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pratipada => "Pratipada",
            Self::Dvitiya => "Dvitiya",
            Self::Tritiya => "Tritiya",
            Self::Chaturthi => "Chaturthi",
            Self::Panchami => "Panchami",
            Self::Shashthi => "Shashthi",
            Self::Saptami => "Saptami",
            Self::Ashtami => "Ashtami",
            Self::Navami => "Navami",
            Self::Dashami => "Dashami",
            Self::Ekadashi => "Ekadashi",
            Self::Dwadashi => "Dwadashi",
            Self::Trayodashi => "Trayodashi",
            Self::Chaturdashi => "Chaturdashi",
            Self::PurnimaAmavasya => "Purnima/Amavasya",
        }
    }

    /// Name resolved for a paksha: the 15th tithi becomes Purnima or Amavasya.
    pub const fn name_in(self, paksha: Paksha) -> &'static str {
        match (self, paksha) {
            (Self::PurnimaAmavasya, Paksha::Shukla) => "Purnima",
            (Self::PurnimaAmavasya, Paksha::Krishna) => "Amavasya",
            _ => self.name(),
        }
    }

    /// 0-based index (Pratipada=0 .. PurnimaAmavasya=14).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Tithi classification of one elongation value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiPosition {
    pub tithi: Tithi,
    /// 1-based tithi number across the month (1-30).
    pub tithi_number: u8,
    pub paksha: Paksha,
    /// 1-based tithi number within the paksha (1-15).
    pub tithi_in_paksha: u8,
    /// Degrees elapsed within the current tithi [0, 12).
    pub degrees_in_tithi: f64,
}

/// Classify a Moon-minus-Sun elongation (degrees, any range) into a tithi.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiPosition {
    let e = normalize_360(elongation_deg);
    let idx = ((e / TITHI_SEGMENT_DEG).floor() as u8).min(29);
    let tithi_number = idx + 1;
    let paksha = if tithi_number <= 15 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    };
    let in_paksha = idx % 15;

    TithiPosition {
        tithi: ALL_TITHIS[in_paksha as usize],
        tithi_number,
        paksha,
        tithi_in_paksha: in_paksha + 1,
        degrees_in_tithi: e - (idx as f64) * TITHI_SEGMENT_DEG,
    }
}
