//! Invoice Domain Ports

use async_trait::async_trait;

use core_kernel::{DomainPort, InvoiceId, PortError};

use crate::invoice::{Invoice, InvoiceDetail, InvoiceSummary, NewInvoice};
use crate::payment::Settlement;

/// Port for invoice persistence
#[async_trait]
pub trait InvoicePort: DomainPort {
    /// Lists every invoice in natural storage order
    async fn list_invoices(&self) -> Result<Vec<InvoiceSummary>, PortError>;

    /// Loads an invoice joined with its owning company
    ///
    /// # Errors
    ///
    /// `PortError::NotFound` if no invoice has this id
    async fn get_invoice(&self, id: InvoiceId) -> Result<InvoiceDetail, PortError>;

    /// Loads the stored invoice row
    ///
    /// # Errors
    ///
    /// `PortError::NotFound` if no invoice has this id
    async fn find_invoice(&self, id: InvoiceId) -> Result<Invoice, PortError>;

    /// Inserts an unpaid invoice
    ///
    /// # Errors
    ///
    /// `PortError::Validation` if the company does not exist or the amount is not positive
    async fn create_invoice(&self, invoice: NewInvoice) -> Result<Invoice, PortError>;

    /// Persists the outcome of a payment
    ///
    /// # Errors
    ///
    /// `PortError::NotFound` if no invoice has this id
    async fn apply_settlement(
        &self,
        id: InvoiceId,
        settlement: Settlement,
    ) -> Result<Invoice, PortError>;

    /// Deletes an invoice
    ///
    /// # Errors
    ///
    /// `PortError::NotFound` if no invoice has this id
    async fn delete_invoice(&self, id: InvoiceId) -> Result<(), PortError>;
}
