use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    ATTR_REFERENCE_BIND, ATTR_REFERENCE_FILTER, ATTR_REFERENCE_INTERFACE, ATTR_REFERENCE_NAME,
    ATTR_REFERENCE_UNBIND,
};
use crate::declaration::cardinality::Cardinality;
use crate::declaration::error::DeclarationError;

/// A declared dependency of a factory on a service type.
///
/// Serde field names match the declaration attribute vocabulary, so an
/// external parser can materialize references directly from configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceDeclaration {
    /// Reference label; selects the bind/unbind pair on the target.
    pub name: String,

    /// Required service type name.
    pub interface: String,

    /// Optional predicate restricting which service instances qualify.
    /// Carried as opaque data; evaluation belongs to the host registry.
    #[serde(default)]
    pub filter: Option<String>,

    /// How many instances may be bound at once.
    pub cardinality: Cardinality,

    /// Method invoked on the target to hand it a service.
    pub bind: String,

    /// Method invoked on the target to withdraw a service.
    pub unbind: String,
}

impl ReferenceDeclaration {
    /// Create a reference with an explicit cardinality and no filter.
    pub fn with_cardinality(
        name: &str,
        interface: &str,
        cardinality: Cardinality,
        bind: &str,
        unbind: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            interface: interface.to_string(),
            filter: None,
            cardinality,
            bind: bind.to_string(),
            unbind: unbind.to_string(),
        }
    }

    /// Create a single-cardinality reference with no filter.
    pub fn single(name: &str, interface: &str, bind: &str, unbind: &str) -> Self {
        Self::with_cardinality(name, interface, Cardinality::Single, bind, unbind)
    }

    /// Create a multiple-cardinality reference with no filter.
    pub fn multiple(name: &str, interface: &str, bind: &str, unbind: &str) -> Self {
        Self::with_cardinality(name, interface, Cardinality::Multiple, bind, unbind)
    }

    /// Attach a service filter expression.
    pub fn with_filter(mut self, filter: &str) -> Self {
        self.filter = Some(filter.to_string());
        self
    }

    /// Check that every attribute carries a usable value.
    ///
    /// The filter is optional, but an empty filter expression is rejected:
    /// a declaration meaning "no filter" omits the attribute instead.
    pub fn validate(&self) -> Result<(), DeclarationError> {
        self.check_attribute(&self.name, ATTR_REFERENCE_NAME)?;
        self.check_attribute(&self.interface, ATTR_REFERENCE_INTERFACE)?;
        self.check_attribute(&self.bind, ATTR_REFERENCE_BIND)?;
        self.check_attribute(&self.unbind, ATTR_REFERENCE_UNBIND)?;
        if let Some(filter) = &self.filter {
            self.check_attribute(filter, ATTR_REFERENCE_FILTER)?;
        }
        Ok(())
    }

    fn check_attribute(
        &self,
        value: &str,
        attribute: &'static str,
    ) -> Result<(), DeclarationError> {
        if value.trim().is_empty() {
            return Err(DeclarationError::EmptyReferenceAttribute {
                reference: self.name.clone(),
                attribute,
            });
        }
        Ok(())
    }
}

impl fmt::Display for ReferenceDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.filter {
            Some(filter) => write!(
                f,
                "reference '{}' on interface '{}' ({}, filter {})",
                self.name, self.interface, self.cardinality, filter
            ),
            None => write!(
                f,
                "reference '{}' on interface '{}' ({})",
                self.name, self.interface, self.cardinality
            ),
        }
    }
}
