//! Error types for chart derivation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use kundli_vedic_base::VedicError;

/// Failures reported by an external collaborator (geocoder, timezone
/// lookup, ephemeris). Propagated unchanged; the core never retries.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CollaboratorError {
    /// The place name could not be geocoded.
    PlaceNotFound(String),
    /// No timezone could be determined for the resolved coordinates.
    TimezoneNotFound(String),
    /// Local civil time could not be converted to UTC (gap, ambiguity, bad zone).
    TimeConversion(String),
    /// The ephemeris could not produce a value for the requested instant.
    EphemerisUnavailable(String),
}

impl Display for CollaboratorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PlaceNotFound(place) => write!(f, "could not geocode place: {place}"),
            Self::TimezoneNotFound(place) => write!(f, "could not find timezone for: {place}"),
            Self::TimeConversion(msg) => write!(f, "time conversion failed: {msg}"),
            Self::EphemerisUnavailable(msg) => write!(f, "ephemeris unavailable: {msg}"),
        }
    }
}

impl Error for CollaboratorError {}

/// Errors from kundli derivation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum KundliError {
    /// Malformed caller input (date/time strings, cusp arity, names, non-finite values).
    InvalidInput(String),
    /// A collaborator failed.
    Collaborator(CollaboratorError),
}

impl Display for KundliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::Collaborator(e) => write!(f, "collaborator error: {e}"),
        }
    }
}

impl Error for KundliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Collaborator(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<CollaboratorError> for KundliError {
    fn from(e: CollaboratorError) -> Self {
        Self::Collaborator(e)
    }
}

impl From<VedicError> for KundliError {
    fn from(e: VedicError) -> Self {
        Self::InvalidInput(e.to_string())
    }
}
