//! # Extension Services Declaration Errors
//!
//! Defines error types raised while building or checking factory
//! declarations, most notably [`DeclarationError`]. A declaration that
//! trips one of these is invalid and must be rejected by whatever parser
//! produced it; nothing at this layer attempts to repair it.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclarationError {
    /// The cardinality attribute carries a value outside the vocabulary.
    #[error("unsupported cardinality value '{0}' (expected 'single' or 'multiple')")]
    UnsupportedCardinality(String),

    /// A required factory attribute is missing or blank.
    #[error("factory declaration attribute '{attribute}' must not be empty")]
    EmptyFactoryAttribute { attribute: &'static str },

    /// A reference attribute is present but blank.
    #[error("reference '{reference}' attribute '{attribute}' must not be empty")]
    EmptyReferenceAttribute {
        reference: String,
        attribute: &'static str,
    },

    /// Two references on one factory share a name, so bind/unbind method
    /// selection would be ambiguous.
    #[error("factory '{factory}' declares reference '{name}' more than once")]
    DuplicateReference { factory: String, name: String },
}
