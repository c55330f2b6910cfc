//! Natal chart (kundli) derivation.
//!
//! Turns raw ephemeris output (tropical body longitudes, house cusps,
//! ascendant) and an ayanamsa into a classified, cross-referenced
//! [`NatalChart`]:
//! - sidereal ascendant, 12 houses with their lords
//! - 9 grahas with sign, house, nakshatra/pada, dignity, retrograde and
//!   combustion flags
//! - panchanga (tithi, paksha, yoga, karana, moon nakshatra)
//! - opposition and special aspects, same-sign conjunctions
//!
//! [`derive_chart`] is pure. [`compute_kundli`] additionally drives the
//! [`GeoTimeResolver`] and [`EphemerisProvider`] collaborators.

pub mod aspects;
pub mod assemble;
pub mod chart;
pub mod chart_types;
pub mod error;
pub mod input_types;
pub mod julian;
pub mod panchanga;
pub mod provider;

pub use aspects::{find_aspects, find_conjunctions};
pub use assemble::{compute_kundli, derive_chart, derive_chart_with_config, derive_from_request};
pub use chart::{house_of, is_retrograde, to_sidereal};
pub use chart_types::{
    AscendantRecord, AspectKind, AspectRecord, CONJUNCTION_ORB_DEG, ChartConfig, ChartRequest,
    ConjunctionRecord, HouseRecord, NatalChart, PanchangaRecord, PlanetRecord,
};
pub use error::{CollaboratorError, KundliError};
pub use input_types::{
    ALL_HOUSE_METHODS, BirthInput, BodyState, DATE_FORMAT, EphemerisSnapshot, GeoLocation,
    GeoTimeContext, HouseMethod, HouseSystem, RiseSet, TIME_FORMAT,
};
pub use julian::{calendar_to_jd, julian_day_ut};
pub use panchanga::derive_panchanga;
pub use provider::{EphemerisProvider, GeoTimeResolver, query_snapshot};
