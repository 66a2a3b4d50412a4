//! Billing Domain - Invoices
//!
//! This crate holds the invoice model and the one piece of real business
//! logic in the system: settling a payment against an invoice.
//!
//! # Settlement
//!
//! An update carries an invoice amount and a paid amount. The stored balance
//! becomes `amt - paid`, with these rules:
//!
//! - The balance is rounded to cents first
//! - A zero balance is stored as [`MINIMUM_BALANCE`] and marks the invoice paid,
//!   because the `invoices.amt` column rejects zero
//! - A positive payment stamps `paid_date` with today
//! - A negative payment (a reversal) clears `paid_date`
//! - A zero payment leaves `paid_date` as it was
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use domain_billing::{settle, PaymentUpdate};
//! use rust_decimal_macros::dec;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let update = PaymentUpdate::from_input(Some(dec!(2000)), Some(dec!(500))).unwrap();
//!
//! let settlement = settle(&update, None, today).unwrap();
//! assert_eq!(settlement.amt, dec!(1500));
//! assert!(!settlement.paid);
//! assert_eq!(settlement.paid_date, Some(today));
//! ```

pub mod invoice;
pub mod payment;
pub mod error;
pub mod ports;

pub use invoice::{Invoice, InvoiceSummary, InvoiceDetail, NewInvoice};
pub use payment::{settle, PaymentUpdate, Settlement, MINIMUM_BALANCE};
pub use error::BillingError;
pub use ports::InvoicePort;
