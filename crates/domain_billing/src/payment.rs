//! Payment settlement
//!
//! Turns an update request into the new stored state of an invoice.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::required;

use crate::error::BillingError;

/// Stored in place of a zero balance; the `invoices.amt` column is `CHECK (amt > 0)`
pub const MINIMUM_BALANCE: Decimal = dec!(0.01);

/// A payment recorded against an invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentUpdate {
    /// Invoice amount the payment is applied to
    pub amt: Decimal,
    /// Amount paid; negative for a reversal
    pub paid: Decimal,
}

impl PaymentUpdate {
    /// Validates presence of both amounts
    ///
    /// A paid amount of zero is valid input; it leaves the paid date untouched.
    pub fn from_input(amt: Option<Decimal>, paid: Option<Decimal>) -> Result<Self, BillingError> {
        Ok(Self {
            amt: required("amt", amt)?,
            paid: required("paid", paid)?,
        })
    }

    /// `amt - paid`
    ///
    /// # Errors
    ///
    /// `BillingError::AmountOutOfRange` if the difference overflows
    pub fn remaining(&self) -> Result<Decimal, BillingError> {
        self.amt
            .checked_sub(self.paid)
            .ok_or(BillingError::AmountOutOfRange {
                amt: self.amt,
                paid: self.paid,
            })
    }
}

/// The state an invoice is persisted with after a payment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    pub amt: Decimal,
    pub paid: bool,
    pub paid_date: Option<NaiveDate>,
}

/// Applies a payment to an invoice
///
/// # Arguments
///
/// * `update` - The requested amount and payment
/// * `current_paid_date` - The invoice's stored paid date, carried over for a zero payment
/// * `today` - The date stamped on a positive payment
///
/// The balance is rounded to cents before the zero check, matching the
/// `NUMERIC(12,2)` column it is stored in.
///
/// # Errors
///
/// `BillingError::AmountOutOfRange` if `amt - paid` overflows
pub fn settle(
    update: &PaymentUpdate,
    current_paid_date: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<Settlement, BillingError> {
    let remaining = update.remaining()?.round_dp(2);

    let (amt, paid) = if remaining.is_zero() {
        (MINIMUM_BALANCE, true)
    } else {
        (remaining, false)
    };

    let paid_date = if update.paid.is_sign_positive() && !update.paid.is_zero() {
        Some(today)
    } else if update.paid.is_sign_negative() && !update.paid.is_zero() {
        None
    } else {
        current_paid_date
    };

    Ok(Settlement {
        amt,
        paid,
        paid_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn earlier() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    }

    fn update(amt: Decimal, paid: Decimal) -> PaymentUpdate {
        PaymentUpdate { amt, paid }
    }

    #[test]
    fn test_partial_payment() {
        let s = settle(&update(dec!(2000), dec!(500)), None, today()).unwrap();
        assert_eq!(s.amt, dec!(1500));
        assert!(!s.paid);
        assert_eq!(s.paid_date, Some(today()));
    }

    #[test]
    fn test_full_payment_clamps_to_minimum() {
        let s = settle(&update(dec!(300), dec!(300)), None, today()).unwrap();
        assert_eq!(s.amt, MINIMUM_BALANCE);
        assert!(s.paid);
        assert_eq!(s.paid_date, Some(today()));
    }

    #[test]
    fn test_reversal_clears_paid_date() {
        let s = settle(&update(dec!(100), dec!(-50)), Some(earlier()), today()).unwrap();
        assert_eq!(s.amt, dec!(150));
        assert_eq!(s.paid_date, None);
    }

    #[test]
    fn test_zero_payment_keeps_paid_date() {
        let s = settle(&update(dec!(100), dec!(0)), Some(earlier()), today()).unwrap();
        assert_eq!(s.amt, dec!(100));
        assert_eq!(s.paid_date, Some(earlier()));
    }

    #[test]
    fn test_negative_zero_counts_as_zero() {
        let s = settle(&update(dec!(100), -dec!(0)), Some(earlier()), today()).unwrap();
        assert_eq!(s.paid_date, Some(earlier()));
    }

    #[test]
    fn test_zero_remaining_with_trailing_scale() {
        let s = settle(&update(dec!(10.50), dec!(10.5)), None, today()).unwrap();
        assert!(s.paid);
        assert_eq!(s.amt, MINIMUM_BALANCE);
    }

    #[test]
    fn test_sub_cent_balance_rounds_to_paid() {
        let s = settle(&update(dec!(10.004), dec!(10)), None, today()).unwrap();
        assert!(s.paid);
        assert_eq!(s.amt, MINIMUM_BALANCE);
    }

    #[test]
    fn test_overflowing_balance_is_an_error() {
        let result = settle(&update(Decimal::MAX, dec!(-1)), None, today());
        assert!(matches!(result, Err(BillingError::AmountOutOfRange { .. })));
    }

    #[test]
    fn test_missing_paid_is_rejected() {
        assert!(PaymentUpdate::from_input(Some(dec!(10)), None).is_err());
        assert!(PaymentUpdate::from_input(None, Some(dec!(10))).is_err());
        assert!(PaymentUpdate::from_input(Some(dec!(10)), Some(dec!(0))).is_ok());
    }
}
