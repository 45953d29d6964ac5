// crates/extsvcs-core/src/binding/tests/error_tests.rs
#![cfg(test)]

use crate::binding::error::BindingError;

#[test]
fn test_rejected_display() {
    let err = BindingError::Rejected {
        reason: "target is shutting down".to_string(),
    };
    assert_eq!(
        format!("{}", err),
        "binding rejected by target: target is shutting down"
    );
}

#[test]
fn test_type_mismatch_display() {
    let err = BindingError::TargetTypeMismatch {
        expected: "status::Dashboard",
    };
    assert_eq!(
        format!("{}", err),
        "target type mismatch: expected status::Dashboard"
    );

    let err = BindingError::ServiceTypeMismatch {
        expected: "log::LogService",
    };
    assert_eq!(
        format!("{}", err),
        "service type mismatch: expected log::LogService"
    );
}

#[test]
fn test_bookkeeping_display() {
    let err = BindingError::NotBound {
        reference: "log".to_string(),
    };
    assert_eq!(
        format!("{}", err),
        "no active binding for the given pair on reference 'log'"
    );

    let err = BindingError::DuplicateBinding {
        reference: "log".to_string(),
    };
    assert_eq!(
        format!("{}", err),
        "binding already recorded for the given pair on reference 'log'"
    );

    let err = BindingError::CardinalityExceeded {
        reference: "log".to_string(),
    };
    assert_eq!(
        format!("{}", err),
        "reference 'log' permits a single binding and one is already active"
    );
}

#[test]
fn test_other_display() {
    let err = BindingError::Other("wiring torn down".to_string());
    assert_eq!(format!("{}", err), "binding failure: wiring torn down");
}

#[test]
fn test_error_debug_format() {
    let err = BindingError::NotBound {
        reference: "log".to_string(),
    };
    let debug = format!("{:?}", err);
    assert!(debug.contains("NotBound"));
    assert!(debug.contains("log"));
}
