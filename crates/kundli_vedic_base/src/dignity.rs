//! Sign-level dignity of a graha.
//!
//! Exaltation, debilitation, moolatrikona and own-sign ownership are
//! resolved at whole-sign granularity and checked in that priority order.
//! Rahu and Ketu have no entries in any table and are always Neutral.

use serde::{Serialize, Serializer};

use crate::graha::{Graha, rashi_lord};
use crate::rashi::Rashi;

/// Dignity of a graha in the rashi it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dignity {
    Exalted,
    Debilitated,
    Moolatrikona,
    OwnSign,
    Neutral,
}

impl Dignity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Exalted => "Exalted",
            Self::Debilitated => "Debilitated",
            Self::Moolatrikona => "Moolatrikona",
            Self::OwnSign => "Own Sign",
            Self::Neutral => "Neutral",
        }
    }
}

impl Serialize for Dignity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Exaltation rashi for sapta grahas. Returns None for Rahu/Ketu.
pub const fn exaltation_rashi(graha: Graha) -> Option<Rashi> {
    match graha {
        Graha::Surya => Some(Rashi::Mesha),
        Graha::Chandra => Some(Rashi::Vrishabha),
        Graha::Mangal => Some(Rashi::Makara),
        Graha::Buddh => Some(Rashi::Kanya),
        Graha::Guru => Some(Rashi::Karka),
        Graha::Shukra => Some(Rashi::Meena),
        Graha::Shani => Some(Rashi::Tula),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Debilitation rashi: the 7th from exaltation. Returns None for Rahu/Ketu.
pub const fn debilitation_rashi(graha: Graha) -> Option<Rashi> {
    match exaltation_rashi(graha) {
        Some(r) => Some(Rashi::from_index(r.index() + 6)),
        None => None,
    }
}

/// Moolatrikona rashi for sapta grahas. Returns None for Rahu/Ketu.
pub const fn moolatrikona_rashi(graha: Graha) -> Option<Rashi> {
    match graha {
        Graha::Surya => Some(Rashi::Simha),
        Graha::Chandra => Some(Rashi::Vrishabha),
        Graha::Mangal => Some(Rashi::Mesha),
        Graha::Buddh => Some(Rashi::Kanya),
        Graha::Guru => Some(Rashi::Dhanu),
        Graha::Shukra => Some(Rashi::Tula),
        Graha::Shani => Some(Rashi::Kumbha),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Whether `graha` lords `rashi`.
pub const fn is_own_sign(graha: Graha, rashi: Rashi) -> bool {
    rashi_lord(rashi) as u8 == graha as u8
}

/// Dignity of `graha` placed in `rashi`.
pub fn dignity_in_rashi(graha: Graha, rashi: Rashi) -> Dignity {
    if exaltation_rashi(graha) == Some(rashi) {
        Dignity::Exalted
    } else if debilitation_rashi(graha) == Some(rashi) {
        Dignity::Debilitated
    } else if moolatrikona_rashi(graha) == Some(rashi) {
        Dignity::Moolatrikona
    } else if is_own_sign(graha, rashi) {
        Dignity::OwnSign
    } else {
        Dignity::Neutral
    }
}
