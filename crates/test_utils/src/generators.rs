//! Property-Based Test Generators
//!
//! Proptest strategies for names, amounts and payments.

use proptest::prelude::*;
use rust_decimal::Decimal;

use domain_billing::PaymentUpdate;

/// Display names with at least one alphanumeric character
pub fn company_name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 &.,'-]{0,40}"
}

/// Arbitrary text, including punctuation, unicode and blank strings
pub fn any_name_strategy() -> impl Strategy<Value = String> {
    any::<String>()
}

/// Positive amounts with two decimal places, as `NUMERIC(12,2)` stores them
pub fn positive_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Paid amounts, including reversals and zero
pub fn paid_amount_strategy() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// A payment against a positive amount
pub fn payment_strategy() -> impl Strategy<Value = PaymentUpdate> {
    (positive_amount_strategy(), paid_amount_strategy())
        .prop_map(|(amt, paid)| PaymentUpdate { amt, paid })
}

/// A payment that clears the whole amount
pub fn full_payment_strategy() -> impl Strategy<Value = PaymentUpdate> {
    positive_amount_strategy().prop_map(|amt| PaymentUpdate { amt, paid: amt })
}
