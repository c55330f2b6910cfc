//! Error types for Vedic classification lookups.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from looking up the classification tables by name.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VedicError {
    /// A name did not match any entry of the named table.
    UnknownName {
        table: &'static str,
        name: String,
    },
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownName { table, name } => write!(f, "unknown {table} name: {name:?}"),
        }
    }
}

impl Error for VedicError {}
