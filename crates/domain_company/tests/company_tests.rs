//! Tests for company input handling

use core_kernel::{slugify, CompanyCode};
use domain_company::{CompanyChanges, CompanyError, CompanySummary, NewCompany};
use proptest::prelude::*;

#[test]
fn test_new_company_trims_fields() {
    let company = NewCompany::from_input(
        Some("  Apple  ".to_string()),
        Some(" Maker of OSX. ".to_string()),
    )
    .unwrap();

    assert_eq!(company.name, "Apple");
    assert_eq!(company.description, "Maker of OSX.");
    assert_eq!(company.code, CompanyCode::new("apple"));
}

#[test]
fn test_new_company_requires_name() {
    let result = NewCompany::from_input(None, Some("Music".to_string()));
    assert!(matches!(result, Err(CompanyError::MissingField(_))));
}

#[test]
fn test_new_company_rejects_blank_name() {
    let result = NewCompany::from_input(Some("   ".to_string()), Some("Music".to_string()));
    assert!(matches!(result, Err(CompanyError::MissingField(_))));
}

#[test]
fn test_changes_require_both_fields() {
    assert!(CompanyChanges::from_input(Some("IBM".to_string()), None).is_err());
    assert!(CompanyChanges::from_input(None, Some("Big blue.".to_string())).is_err());

    let changes = CompanyChanges::from_input(
        Some("IBM".to_string()),
        Some("Big blue.".to_string()),
    )
    .unwrap();
    assert_eq!(changes.name, "IBM");
}

#[test]
fn test_summary_from_company() {
    let company = NewCompany::from_input(Some("Spotify".to_string()), Some("Music".to_string()))
        .unwrap()
        .into_company();

    let summary = CompanySummary::from(company);
    assert_eq!(summary.code.as_str(), "spotify");
    assert_eq!(summary.name, "Spotify");
}

proptest! {
    #[test]
    fn code_always_matches_slug_of_name(name in "[A-Za-z][A-Za-z0-9 .,&'-]{0,30}") {
        let company = NewCompany::from_input(Some(name.clone()), Some("desc".to_string())).unwrap();
        prop_assert_eq!(company.code.as_str(), slugify(name.trim()));
    }
}
