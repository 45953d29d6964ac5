//! # Extension Services Binding
//!
//! The dynamic half of the extension services model: the capability
//! contract through which components receive and release service
//! instances, and bookkeeping for the associations that result.
//!
//! ## Key Submodules and Responsibilities:
//!
//! - **[`error`]**: The [`BindingError`] kind raised when an association
//!   cannot be established or removed, and the [`BindingResult`] alias.
//! - **[`tracker`]**: [`Binding`] records and the [`BindingTracker`] that
//!   holds them, enforcing the release-what-was-established and
//!   single-cardinality invariants.
//! - **[`traits`]**: The [`Binder`] capability itself, the [`DynObject`]
//!   handle type, and the [`TypedBinder`] adapter that delivers services
//!   to concretely typed targets by downcast.
//!
//! Which services are bound, in what order, and what happens after a
//! failure are decisions of the host registry driving these types.
pub mod error;
pub mod tracker;
pub mod traits;

pub use error::{BindingError, BindingResult};
pub use tracker::{Binding, BindingTracker};
pub use traits::{Binder, DynObject, TypedBinder};

#[cfg(test)]
mod tests;
