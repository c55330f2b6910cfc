//! Pure-math Vedic classification for natal chart derivation.
//!
//! This crate provides:
//! - Angle normalization and arc arithmetic
//! - Rashi (12-sign) and nakshatra/pada (27-fold) classification
//! - Graha enumeration, rashi lordship and sign-level dignity tables
//! - Combustion and drishti (aspect) rules
//! - Tithi, yoga and karana name tables for the panchanga
//!
//! Nothing here performs I/O or queries an ephemeris; every function is a
//! pure mapping from sidereal longitudes to classifications.

pub mod combustion;
pub mod dignity;
pub mod drishti;
pub mod error;
pub mod graha;
pub mod karana;
pub mod nakshatra;
pub mod rashi;
pub mod tithi;
pub mod util;
pub mod yoga;

pub use combustion::{COMBUSTION_ORB_DEG, can_combust, is_combust, is_combust_within};
pub use dignity::{
    Dignity, debilitation_rashi, dignity_in_rashi, exaltation_rashi, is_own_sign,
    moolatrikona_rashi,
};
pub use drishti::{ASPECT_ORB_DEG, OPPOSITION_DEG, special_aspect_angles, within_orb};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, EPHEMERIS_GRAHAS, Graha, rashi_lord};
pub use karana::{ALL_KARANAS, KARANA_SEGMENT_DEG, Karana, KaranaPosition, karana_from_elongation};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use rashi::{ALL_RASHIS, RASHI_SPAN, Rashi, RashiInfo, rashi_from_longitude};
pub use tithi::{ALL_TITHIS, Paksha, TITHI_SEGMENT_DEG, Tithi, TithiPosition, tithi_from_elongation};
pub use util::{angular_distance, normalize_360};
pub use yoga::{ALL_YOGAS, YOGA_SEGMENT_DEG, Yoga, YogaPosition, yoga_from_sum};
