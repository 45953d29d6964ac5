/// Identity of the extension services plugin
pub const PLUGIN_ID: &str = "name.neilbartlett.extsvcs.core";

/// Extension point collecting injected factory declarations
pub const EXT_INJECTED_FACTORIES: &str = "injectedFactories";

/// Factory attribute: unique identifier
pub const ATTR_FACTORY_ID: &str = "id";

/// Factory attribute: implementing type name
pub const ATTR_FACTORY_CLASS: &str = "class";

/// Element declaring one service dependency of a factory
pub const ELEM_REFERENCE: &str = "reference";

/// Reference attribute: label selecting the bind/unbind pair on the target
pub const ATTR_REFERENCE_NAME: &str = "name";

/// Reference attribute: required service type
pub const ATTR_REFERENCE_INTERFACE: &str = "interface";

/// Reference attribute: optional service-matching predicate
pub const ATTR_REFERENCE_FILTER: &str = "filter";

/// Reference attribute: how many instances may be bound at once
pub const ATTR_REFERENCE_CARDINALITY: &str = "cardinality";

/// Reference attribute: method invoked to hand a service to the target
pub const ATTR_REFERENCE_BIND: &str = "bind";

/// Reference attribute: method invoked to withdraw a service from the target
pub const ATTR_REFERENCE_UNBIND: &str = "unbind";

/// Cardinality value permitting at most one active binding
pub const VAL_REFERENCE_CARDINALITY_SINGLE: &str = "single";

/// Cardinality value permitting any number of active bindings
pub const VAL_REFERENCE_CARDINALITY_MULTIPLE: &str = "multiple";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_identity_values() {
        assert_eq!(PLUGIN_ID, "name.neilbartlett.extsvcs.core");
        assert_eq!(EXT_INJECTED_FACTORIES, "injectedFactories");
    }

    #[test]
    fn test_factory_attribute_values() {
        assert_eq!(ATTR_FACTORY_ID, "id");
        assert_eq!(ATTR_FACTORY_CLASS, "class");
    }

    #[test]
    fn test_reference_attribute_values() {
        assert_eq!(ELEM_REFERENCE, "reference");
        assert_eq!(ATTR_REFERENCE_NAME, "name");
        assert_eq!(ATTR_REFERENCE_INTERFACE, "interface");
        assert_eq!(ATTR_REFERENCE_FILTER, "filter");
        assert_eq!(ATTR_REFERENCE_CARDINALITY, "cardinality");
        assert_eq!(ATTR_REFERENCE_BIND, "bind");
        assert_eq!(ATTR_REFERENCE_UNBIND, "unbind");
    }

    #[test]
    fn test_cardinality_values() {
        assert_eq!(VAL_REFERENCE_CARDINALITY_SINGLE, "single");
        assert_eq!(VAL_REFERENCE_CARDINALITY_MULTIPLE, "multiple");
        assert_ne!(
            VAL_REFERENCE_CARDINALITY_SINGLE,
            VAL_REFERENCE_CARDINALITY_MULTIPLE
        );
    }
}
