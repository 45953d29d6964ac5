use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::binding::error::{BindingError, BindingResult};
use crate::binding::traits::{Binder, DynObject};
use crate::declaration::cardinality::Cardinality;
use crate::declaration::reference::ReferenceDeclaration;

/// An established association between a target and a service instance.
///
/// Holds strong handles to both objects, so a recorded pair can never alias
/// a recycled allocation.
#[derive(Clone)]
pub struct Binding {
    reference: String,
    target: DynObject,
    service: DynObject,
}

impl Binding {
    fn new(reference: &str, target: &DynObject, service: &DynObject) -> Self {
        Self {
            reference: reference.to_string(),
            target: target.clone(),
            service: service.clone(),
        }
    }

    /// Name of the reference this binding satisfies.
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// The object the service was handed to.
    pub fn target(&self) -> &DynObject {
        &self.target
    }

    /// The bound service instance.
    pub fn service(&self) -> &DynObject {
        &self.service
    }

    /// True when `target` and `service` are the same objects this binding
    /// was established for. Identity is `Arc` allocation identity.
    pub fn matches_pair(&self, target: &DynObject, service: &DynObject) -> bool {
        Arc::ptr_eq(&self.target, target) && Arc::ptr_eq(&self.service, service)
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("reference", &self.reference)
            .field("target", &Arc::as_ptr(&self.target))
            .field("service", &Arc::as_ptr(&self.service))
            .finish()
    }
}

/// Bookkeeping for active bindings, keyed by reference name.
///
/// The tracker records what the host registry has established and enforces
/// the two invariants of the binding model: a pair is released only if it
/// was previously established, and a single-cardinality reference holds at
/// most one active binding at a time. It performs no service matching, no
/// ordering of multiple binds, and no retry on failure; sequencing is
/// owned by the registry.
#[derive(Debug, Default)]
pub struct BindingTracker {
    bindings: HashMap<String, Vec<Binding>>,
}

impl BindingTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Record a binding for `reference`, enforcing its cardinality.
    pub fn establish(
        &mut self,
        reference: &ReferenceDeclaration,
        target: &DynObject,
        service: &DynObject,
    ) -> BindingResult<()> {
        self.check_establish(reference, target, service)?;
        self.record(reference, target, service);
        Ok(())
    }

    /// Remove a previously recorded binding and return the record.
    pub fn release(
        &mut self,
        reference: &ReferenceDeclaration,
        target: &DynObject,
        service: &DynObject,
    ) -> BindingResult<Binding> {
        let not_bound = || BindingError::NotBound {
            reference: reference.name.clone(),
        };
        if let Some(entries) = self.bindings.get_mut(&reference.name) {
            let index = entries
                .iter()
                .position(|b| b.matches_pair(target, service))
                .ok_or_else(not_bound)?;
            let binding = entries.remove(index);
            if entries.is_empty() {
                self.bindings.remove(&reference.name);
            }
            log::debug!("released binding for reference '{}'", reference.name);
            Ok(binding)
        } else {
            Err(not_bound())
        }
    }

    /// Invoke `binder.bind` for the pair and record the binding when it
    /// succeeds. Cardinality is checked before the binder runs, so a
    /// rejected bind leaves no partial state.
    pub fn bind_with(
        &mut self,
        binder: &dyn Binder,
        reference: &ReferenceDeclaration,
        target: &DynObject,
        service: &DynObject,
    ) -> BindingResult<()> {
        self.check_establish(reference, target, service)?;
        binder.bind(target, service)?;
        self.record(reference, target, service);
        Ok(())
    }

    /// Invoke `binder.unbind` for a recorded pair and drop the record when
    /// the binder succeeds. A failing unbind leaves the record in place;
    /// what to do next is the caller's decision.
    pub fn unbind_with(
        &mut self,
        binder: &dyn Binder,
        reference: &ReferenceDeclaration,
        target: &DynObject,
        service: &DynObject,
    ) -> BindingResult<Binding> {
        if !self.is_bound(&reference.name, target, service) {
            return Err(BindingError::NotBound {
                reference: reference.name.clone(),
            });
        }
        binder.unbind(target, service)?;
        self.release(reference, target, service)
    }

    /// Whether the exact pair is currently recorded for the reference.
    pub fn is_bound(&self, reference_name: &str, target: &DynObject, service: &DynObject) -> bool {
        self.bindings
            .get(reference_name)
            .map(|entries| entries.iter().any(|b| b.matches_pair(target, service)))
            .unwrap_or(false)
    }

    /// Number of active bindings for the reference.
    pub fn active_count(&self, reference_name: &str) -> usize {
        self.bindings
            .get(reference_name)
            .map(|entries| entries.len())
            .unwrap_or(0)
    }

    /// Service instances currently bound for the reference.
    pub fn active_services(&self, reference_name: &str) -> Vec<DynObject> {
        self.bindings
            .get(reference_name)
            .map(|entries| entries.iter().map(|b| b.service.clone()).collect())
            .unwrap_or_default()
    }

    /// True when no bindings are recorded at all.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Drop every recorded binding.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    fn check_establish(
        &self,
        reference: &ReferenceDeclaration,
        target: &DynObject,
        service: &DynObject,
    ) -> BindingResult<()> {
        if let Some(entries) = self.bindings.get(&reference.name) {
            if entries.iter().any(|b| b.matches_pair(target, service)) {
                return Err(BindingError::DuplicateBinding {
                    reference: reference.name.clone(),
                });
            }
            if reference.cardinality == Cardinality::Single && !entries.is_empty() {
                return Err(BindingError::CardinalityExceeded {
                    reference: reference.name.clone(),
                });
            }
        }
        Ok(())
    }

    fn record(
        &mut self,
        reference: &ReferenceDeclaration,
        target: &DynObject,
        service: &DynObject,
    ) {
        let entries = self.bindings.entry(reference.name.clone()).or_default();
        entries.push(Binding::new(&reference.name, target, service));
        log::debug!(
            "established binding for reference '{}' ({} active)",
            reference.name,
            entries.len()
        );
    }
}
