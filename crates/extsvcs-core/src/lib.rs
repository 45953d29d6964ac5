//! # Extension Services Core
//!
//! Core contracts for the extension services plugin: the [`Binder`]
//! capability through which components receive and release service
//! instances, the declarative vocabulary naming injected factories and
//! their service references, and bookkeeping for active bindings.
//!
//! The host runtime that discovers factory declarations, matches service
//! instances to references and drives bind/unbind sequencing lives outside
//! this crate; everything here is the contract surface it builds on.
pub mod binding;
pub mod constants;
pub mod declaration;

// Re-export the public surface for consumers of the crate
pub use binding::{
    Binder, Binding, BindingError, BindingResult, BindingTracker, DynObject, TypedBinder,
};
pub use declaration::{
    Cardinality, DeclarationBuilder, DeclarationError, FactoryDeclaration, ReferenceDeclaration,
};
