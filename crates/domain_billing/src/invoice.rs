//! Invoice records and request input

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{required, required_text, CompanyCode, InvoiceId};
use domain_company::Company;

use crate::error::BillingError;

/// A stored invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    pub comp_code: CompanyCode,
    /// Outstanding amount; never zero
    #[serde(with = "rust_decimal::serde::float")]
    pub amt: Decimal,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

/// The listing projection of an invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceSummary {
    pub id: InvoiceId,
    pub comp_code: CompanyCode,
}

/// An invoice with its owning company embedded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceDetail {
    pub id: InvoiceId,
    #[serde(with = "rust_decimal::serde::float")]
    pub amt: Decimal,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    pub company: Company,
}

/// Input for creating an invoice
///
/// New invoices are always unpaid and carry no paid date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInvoice {
    pub comp_code: CompanyCode,
    pub amt: Decimal,
    pub add_date: NaiveDate,
}

impl NewInvoice {
    /// Validates presence of both fields
    ///
    /// The amount is not range-checked here; the store rejects non-positive
    /// amounts.
    ///
    /// # Arguments
    ///
    /// * `comp_code` - Code of the owning company
    /// * `amt` - Invoice amount
    /// * `add_date` - Date the invoice is raised
    pub fn from_input(
        comp_code: Option<String>,
        amt: Option<Decimal>,
        add_date: NaiveDate,
    ) -> Result<Self, BillingError> {
        let comp_code = CompanyCode::new(required_text("comp_code", comp_code)?);
        let amt = required("amt", amt)?;

        Ok(Self {
            comp_code,
            amt,
            add_date,
        })
    }
}
