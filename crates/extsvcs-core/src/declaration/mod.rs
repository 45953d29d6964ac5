//! # Extension Services Declarations
//!
//! The static half of the extension services model: descriptions of
//! injected factories and the service references they depend on, as an
//! external configuration parser would materialize them from the
//! `injectedFactories` extension point.
//!
//! ## Key Submodules and Responsibilities:
//!
//! - **[`cardinality`]**: The [`Cardinality`] vocabulary constraining how
//!   many service instances may satisfy one reference at a time.
//! - **[`error`]**: Declaration-level error types ([`DeclarationError`]).
//! - **[`factory`]**: The [`FactoryDeclaration`] describing one injected
//!   factory (id, implementing class, owned references) and the fluent
//!   [`DeclarationBuilder`].
//! - **[`reference`]**: The [`ReferenceDeclaration`] describing one service
//!   dependency (name, interface, optional filter, cardinality, bind and
//!   unbind method names).
//!
//! Declarations are created from static configuration and treated as
//! immutable thereafter; nothing in this module discovers, parses, or
//! resolves them.
pub mod cardinality;
pub mod error;
pub mod factory;
pub mod reference;

pub use cardinality::Cardinality;
pub use error::DeclarationError;
pub use factory::{DeclarationBuilder, FactoryDeclaration};
pub use reference::ReferenceDeclaration;
