//! Properties over the shared generators and builders

use chrono::NaiveDate;
use proptest::prelude::*;

use core_kernel::slugify;
use domain_billing::{settle, MINIMUM_BALANCE};
use domain_company::NewCompany;
use test_utils::{
    any_name_strategy, company_name_strategy, full_payment_strategy, payment_strategy,
    NewCompanyBuilder, NewIndustryBuilder, PaymentBuilder,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

proptest! {
    #[test]
    fn generated_company_names_yield_codes(name in company_name_strategy()) {
        let company = NewCompany::from_input(Some(name.clone()), Some("x".to_string())).unwrap();
        prop_assert_eq!(company.code.as_str(), slugify(name.trim()));
    }

    #[test]
    fn any_input_either_fails_or_slugs(name in any_name_strategy()) {
        if let Ok(company) = NewCompany::from_input(Some(name.clone()), Some("x".to_string())) {
            prop_assert!(!company.code.is_empty());
            prop_assert_eq!(company.code.as_str(), slugify(name.trim()));
        }
    }

    #[test]
    fn settlement_follows_remaining_balance(update in payment_strategy()) {
        let settlement = settle(&update, None, today()).unwrap();
        let remaining = update.remaining().unwrap().round_dp(2);
        if remaining.is_zero() {
            prop_assert!(settlement.paid);
            prop_assert_eq!(settlement.amt, MINIMUM_BALANCE);
        } else {
            prop_assert!(!settlement.paid);
            prop_assert_eq!(settlement.amt, remaining);
        }
    }

    #[test]
    fn full_payment_always_settles(update in full_payment_strategy()) {
        let settlement = settle(&update, None, today()).unwrap();
        prop_assert!(settlement.paid);
        prop_assert_eq!(settlement.paid_date, Some(today()));
    }
}

#[test]
fn test_builders_produce_usable_input() {
    let company = NewCompanyBuilder::new().build();
    assert!(!company.code.is_empty());

    let named = NewCompanyBuilder::new().with_name("Acme Widgets").build();
    assert_eq!(named.code.as_str(), "acme-widgets");

    let industry = NewIndustryBuilder::new().with_name("Heavy Industry").build();
    assert_eq!(industry.code.as_str(), "heavy-industry");
    assert!(!NewIndustryBuilder::new().build().code.is_empty());
}

#[test]
fn test_payment_builder() {
    let update = PaymentBuilder::new().amt(rust_decimal_macros::dec!(80)).in_full().build();
    assert!(update.remaining().unwrap().is_zero());
    assert_eq!(PaymentBuilder::new().build().remaining().unwrap(), rust_decimal_macros::dec!(1500));
}
