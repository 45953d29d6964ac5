use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::constants::{ATTR_FACTORY_CLASS, ATTR_FACTORY_ID};
use crate::declaration::error::DeclarationError;
use crate::declaration::reference::ReferenceDeclaration;

/// Declares one injected factory: the implementing type and the service
/// references to satisfy before instances can be put to work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactoryDeclaration {
    /// Unique factory identifier.
    pub id: String,

    /// Implementing type name.
    pub class: String,

    /// Service references owned by this factory.
    #[serde(default)]
    pub references: Vec<ReferenceDeclaration>,
}

impl FactoryDeclaration {
    /// Create a declaration with no references.
    pub fn new(id: &str, class: &str) -> Self {
        Self {
            id: id.to_string(),
            class: class.to_string(),
            references: Vec::new(),
        }
    }

    /// Add a service reference.
    pub fn add_reference(&mut self, reference: ReferenceDeclaration) -> &mut Self {
        self.references.push(reference);
        self
    }

    /// Look up a reference by name.
    pub fn get_reference(&self, name: &str) -> Option<&ReferenceDeclaration> {
        self.references.iter().find(|r| r.name == name)
    }

    /// Check the whole declaration: factory attributes must be non-empty,
    /// every reference must validate, and reference names must be unique
    /// within the factory.
    pub fn validate(&self) -> Result<(), DeclarationError> {
        if self.id.trim().is_empty() {
            return Err(DeclarationError::EmptyFactoryAttribute {
                attribute: ATTR_FACTORY_ID,
            });
        }
        if self.class.trim().is_empty() {
            return Err(DeclarationError::EmptyFactoryAttribute {
                attribute: ATTR_FACTORY_CLASS,
            });
        }

        let mut seen = HashSet::new();
        for reference in &self.references {
            reference.validate()?;
            if !seen.insert(reference.name.as_str()) {
                return Err(DeclarationError::DuplicateReference {
                    factory: self.id.clone(),
                    name: reference.name.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Fluent builder for factory declarations.
pub struct DeclarationBuilder {
    declaration: FactoryDeclaration,
}

impl DeclarationBuilder {
    /// Start a declaration for the given factory id and implementing class.
    pub fn new(id: &str, class: &str) -> Self {
        Self {
            declaration: FactoryDeclaration::new(id, class),
        }
    }

    /// Add a service reference.
    pub fn reference(mut self, reference: ReferenceDeclaration) -> Self {
        self.declaration.add_reference(reference);
        self
    }

    /// Build the declaration as assembled. Validation is a separate,
    /// explicit step via [`FactoryDeclaration::validate`].
    pub fn build(self) -> FactoryDeclaration {
        self.declaration
    }
}
