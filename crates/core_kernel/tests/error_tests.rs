//! Tests for core_kernel error types

use core_kernel::error::CoreError;
use core_kernel::{required, required_text, IdentifierError, PortError};

#[test]
fn test_core_error_validation() {
    let error = CoreError::validation("Invalid input");

    match error {
        CoreError::Validation(msg) => assert_eq!(msg, "Invalid input"),
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_core_error_not_found() {
    let error = CoreError::not_found("Company not found");

    match error {
        CoreError::NotFound(msg) => assert_eq!(msg, "Company not found"),
        _ => panic!("Expected NotFound error"),
    }
}

#[test]
fn test_core_error_from_identifier_error() {
    let id_error = IdentifierError::InvalidInvoiceId("x".to_string());
    let core_error: CoreError = id_error.into();

    assert!(matches!(core_error, CoreError::Identifier(_)));
}

#[test]
fn test_core_error_display() {
    let error = CoreError::validation("Test error");
    let display = format!("{}", error);

    assert!(display.contains("Validation error"));
}

#[test]
fn test_required_text_error_is_validation() {
    let error = required_text("description", Some(String::new())).unwrap_err();
    assert!(matches!(error, CoreError::Validation(_)));
}

#[test]
fn test_required_passes_value_through() {
    assert_eq!(required("paid", Some(0)).unwrap(), 0);
}

#[test]
fn test_port_error_constructors() {
    assert!(matches!(PortError::validation("amt"), PortError::Validation { field: None, .. }));
    assert!(matches!(PortError::internal("boom"), PortError::Internal { source: None, .. }));
}
