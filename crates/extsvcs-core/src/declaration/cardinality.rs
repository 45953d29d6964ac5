use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{VAL_REFERENCE_CARDINALITY_MULTIPLE, VAL_REFERENCE_CARDINALITY_SINGLE};
use crate::declaration::error::DeclarationError;

/// Constraint on how many service instances may satisfy one reference at a
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cardinality {
    /// At most one active binding for the reference.
    Single,
    /// Any number of simultaneous bindings.
    Multiple,
}

impl Cardinality {
    /// Stable string value used in factory declarations.
    pub fn as_str(self) -> &'static str {
        match self {
            Cardinality::Single => VAL_REFERENCE_CARDINALITY_SINGLE,
            Cardinality::Multiple => VAL_REFERENCE_CARDINALITY_MULTIPLE,
        }
    }

    /// All declaration values recognized for the cardinality attribute.
    pub fn supported_values() -> &'static [&'static str] {
        &[
            VAL_REFERENCE_CARDINALITY_SINGLE,
            VAL_REFERENCE_CARDINALITY_MULTIPLE,
        ]
    }
}

impl FromStr for Cardinality {
    type Err = DeclarationError;

    /// Parses a declaration value. Matching is exact: the vocabulary values
    /// are literals, so case variants and surrounding whitespace are
    /// rejected like any other unknown value.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            VAL_REFERENCE_CARDINALITY_SINGLE => Ok(Cardinality::Single),
            VAL_REFERENCE_CARDINALITY_MULTIPLE => Ok(Cardinality::Multiple),
            other => Err(DeclarationError::UnsupportedCardinality(other.to_string())),
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
