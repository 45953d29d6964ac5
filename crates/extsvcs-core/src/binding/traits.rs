use std::any::{self, Any};
use std::sync::Arc;

use crate::binding::error::{BindingError, BindingResult};

/// Shared, dynamically typed handle to an object taking part in a binding.
///
/// Targets and service instances are owned by the host registry and handed
/// around as `Arc`s; identity is allocation identity.
pub type DynObject = Arc<dyn Any + Send + Sync>;

/// Capability contract for components that receive and release service
/// instances.
///
/// Both operations are plain synchronous calls. Success is the absence of
/// failure; there is no return value to inspect. Calling `unbind` for a
/// pair that was never bound is a caller error the implementation is not
/// required to guard against.
pub trait Binder: Send + Sync {
    /// Associate `service` with `target`.
    fn bind(&self, target: &DynObject, service: &DynObject) -> BindingResult<()>;

    /// Dissociate a previously bound `service` from `target`.
    fn unbind(&self, target: &DynObject, service: &DynObject) -> BindingResult<()>;
}

type DeliveryFn<T, S> = Box<dyn Fn(&T, Arc<S>) -> BindingResult<()> + Send + Sync>;

/// Adapts a typed attach/detach callback pair into a [`Binder`].
///
/// A reference declaration names the bind and unbind methods to invoke on
/// the target; with no reflection available, the registry wires those up as
/// callbacks when it instantiates the factory. The adapter downcasts both
/// objects to their concrete types and reports a type mismatch as a
/// [`BindingError`], the analog of a reflective invocation failure.
pub struct TypedBinder<T, S> {
    attach: DeliveryFn<T, S>,
    detach: DeliveryFn<T, S>,
}

impl<T, S> TypedBinder<T, S>
where
    T: Send + Sync + 'static,
    S: Send + Sync + 'static,
{
    /// Create a binder from an attach and a detach callback.
    ///
    /// The callbacks receive the concrete target and a shared handle to the
    /// concrete service. Targets that store services mutate through
    /// interior mutability, since they are shared with the registry.
    pub fn new<A, D>(attach: A, detach: D) -> Self
    where
        A: Fn(&T, Arc<S>) -> BindingResult<()> + Send + Sync + 'static,
        D: Fn(&T, Arc<S>) -> BindingResult<()> + Send + Sync + 'static,
    {
        Self {
            attach: Box::new(attach),
            detach: Box::new(detach),
        }
    }

    fn downcast_target(&self, target: &DynObject) -> BindingResult<Arc<T>> {
        target
            .clone()
            .downcast::<T>()
            .map_err(|_| BindingError::TargetTypeMismatch {
                expected: any::type_name::<T>(),
            })
    }

    fn downcast_service(&self, service: &DynObject) -> BindingResult<Arc<S>> {
        service
            .clone()
            .downcast::<S>()
            .map_err(|_| BindingError::ServiceTypeMismatch {
                expected: any::type_name::<S>(),
            })
    }
}

impl<T, S> Binder for TypedBinder<T, S>
where
    T: Send + Sync + 'static,
    S: Send + Sync + 'static,
{
    fn bind(&self, target: &DynObject, service: &DynObject) -> BindingResult<()> {
        let target = self.downcast_target(target)?;
        let service = self.downcast_service(service)?;
        (self.attach)(&target, service)
    }

    fn unbind(&self, target: &DynObject, service: &DynObject) -> BindingResult<()> {
        let target = self.downcast_target(target)?;
        let service = self.downcast_service(service)?;
        (self.detach)(&target, service)
    }
}
