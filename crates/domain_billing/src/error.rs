//! Billing domain errors

use core_kernel::CoreError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur in the billing domain
#[derive(Debug, Error)]
pub enum BillingError {
    /// A required field was absent or blank
    #[error("{0}")]
    MissingField(#[from] CoreError),

    /// `amt - paid` does not fit in a decimal
    #[error("Amount out of range: {amt} - {paid}")]
    AmountOutOfRange { amt: Decimal, paid: Decimal },
}
