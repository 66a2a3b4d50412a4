//! Invoice DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use domain_billing::{Invoice, InvoiceDetail, InvoiceSummary};

/// Body of `POST /invoices`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateInvoiceRequest {
    pub comp_code: Option<String>,
    pub amt: Option<Decimal>,
}

/// Body of `PUT /invoices/:id`
///
/// `paid` is the amount paid, not a flag.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateInvoiceRequest {
    pub amt: Option<Decimal>,
    pub paid: Option<Decimal>,
}

#[derive(Debug, Serialize)]
pub struct InvoiceListResponse {
    pub invoices: Vec<InvoiceSummary>,
}

#[derive(Debug, Serialize)]
pub struct InvoiceResponse {
    pub invoice: Invoice,
}

#[derive(Debug, Serialize)]
pub struct InvoiceDetailResponse {
    pub invoice: InvoiceDetail,
}
