//! # Extension Services Binding Errors
//!
//! Defines [`BindingError`], the single error kind raised when a service
//! association cannot be established or removed, and the [`BindingResult`]
//! alias used throughout the binding module. Whether a failure is retried,
//! logged, or treated as fatal is the caller's decision.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BindingError {
    /// The target refused the service instance.
    #[error("binding rejected by target: {reason}")]
    Rejected { reason: String },

    /// The target object is not of the type the binder delivers to.
    #[error("target type mismatch: expected {expected}")]
    TargetTypeMismatch { expected: &'static str },

    /// The service object is not of the type the binder delivers.
    #[error("service type mismatch: expected {expected}")]
    ServiceTypeMismatch { expected: &'static str },

    /// No binding is recorded for the given pair.
    #[error("no active binding for the given pair on reference '{reference}'")]
    NotBound { reference: String },

    /// The exact pair is already recorded for the reference.
    #[error("binding already recorded for the given pair on reference '{reference}'")]
    DuplicateBinding { reference: String },

    /// A single-cardinality reference already holds its one binding.
    #[error("reference '{reference}' permits a single binding and one is already active")]
    CardinalityExceeded { reference: String },

    /// Any other failure to establish or remove an association.
    #[error("binding failure: {0}")]
    Other(String),
}

/// Shorthand for results carrying a [`BindingError`].
pub type BindingResult<T> = std::result::Result<T, BindingError>;
