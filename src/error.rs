//! Error types for catalog loading and configuration edits.
//!
//! All errors that can occur while loading species data or editing a
//! creature are represented by the `CalcError` enum. None of them are
//! fatal to a running board; the only ones that abort anything are the
//! catalog errors, which abort the catalog load itself.

use crate::stat::Stat;
use thiserror::Error;

/// Errors produced by catalog loading and configuration edits.
///
/// # Examples
///
/// ```rust
/// use monstat::CalcError;
///
/// let err = CalcError::SpeciesNotFound("Missingno".to_string());
/// assert_eq!(err.to_string(), "Species not found: Missingno");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalcError {
    /// The requested species name is not a key of the catalog.
    ///
    /// Recoverable: the configuration that asked for it is left untouched.
    #[error("Species not found: {0}")]
    SpeciesNotFound(String),

    /// A base stat in the catalog is not a non-negative decimal integer.
    #[error("Invalid base stat {stat} for species {species}: {raw:?}")]
    InvalidBaseStat {
        species: String,
        stat: Stat,
        raw: String,
    },

    /// A catalog record lists no types, or more than two.
    #[error("Species {species} must have 1 or 2 types, found {count}")]
    InvalidTypes { species: String, count: usize },

    /// A catalog record lists no abilities.
    #[error("Species {0} has no abilities")]
    NoAbilities(String),

    /// The ability is not one the species can have.
    #[error("Species {species} cannot have ability {ability}")]
    UnknownAbility { species: String, ability: String },

    /// A numeric field holds text that is not a number.
    #[error("Invalid numeric input for {field}: {raw:?}")]
    InvalidNumericInput { field: String, raw: String },

    /// A catalog or configuration document could not be read or decoded.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for CalcError {
    fn from(err: std::io::Error) -> Self {
        CalcError::Decode(err.to_string())
    }
}
