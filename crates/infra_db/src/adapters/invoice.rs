//! PostgreSQL Invoice Adapter

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use core_kernel::{CompanyCode, DomainPort, InvoiceId, PortError};
use domain_billing::{Invoice, InvoiceDetail, InvoicePort, InvoiceSummary, NewInvoice, Settlement};
use domain_company::Company;

use super::db_to_port_error;
use crate::repositories::invoice::{InvoiceRepository, InvoiceRow};

/// PostgreSQL-backed implementation of the InvoicePort trait
#[derive(Debug, Clone)]
pub struct PostgresInvoiceAdapter {
    repository: InvoiceRepository,
}

impl PostgresInvoiceAdapter {
    /// Creates a new PostgreSQL invoice adapter
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: InvoiceRepository::new(pool),
        }
    }
}

impl DomainPort for PostgresInvoiceAdapter {}

#[async_trait]
impl InvoicePort for PostgresInvoiceAdapter {
    #[instrument(skip(self))]
    async fn list_invoices(&self) -> Result<Vec<InvoiceSummary>, PortError> {
        let rows = self.repository.list().await.map_err(db_to_port_error)?;

        Ok(rows
            .into_iter()
            .map(|row| InvoiceSummary {
                id: InvoiceId::new(row.id),
                comp_code: CompanyCode::new(row.comp_code),
            })
            .collect())
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn get_invoice(&self, id: InvoiceId) -> Result<InvoiceDetail, PortError> {
        let row = self
            .repository
            .find_with_company(id.value())
            .await
            .map_err(db_to_port_error)?
            .ok_or_else(|| PortError::not_found("Invoice", id))?;

        Ok(InvoiceDetail {
            id: InvoiceId::new(row.id),
            amt: row.amt,
            paid: row.paid,
            add_date: row.add_date,
            paid_date: row.paid_date,
            company: Company {
                code: CompanyCode::new(row.code),
                name: row.name,
                description: row.description,
            },
        })
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn find_invoice(&self, id: InvoiceId) -> Result<Invoice, PortError> {
        let row = self
            .repository
            .find(id.value())
            .await
            .map_err(db_to_port_error)?
            .ok_or_else(|| PortError::not_found("Invoice", id))?;

        Ok(row_to_invoice(row))
    }

    #[instrument(skip(self, invoice), fields(comp_code = %invoice.comp_code))]
    async fn create_invoice(&self, invoice: NewInvoice) -> Result<Invoice, PortError> {
        let row = self
            .repository
            .insert(invoice.comp_code.as_str(), invoice.amt, invoice.add_date)
            .await
            .map_err(db_to_port_error)?;

        Ok(row_to_invoice(row))
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn apply_settlement(
        &self,
        id: InvoiceId,
        settlement: Settlement,
    ) -> Result<Invoice, PortError> {
        let row = self
            .repository
            .update_balance(id.value(), settlement.amt, settlement.paid, settlement.paid_date)
            .await
            .map_err(db_to_port_error)?
            .ok_or_else(|| PortError::not_found("Invoice", id))?;

        Ok(row_to_invoice(row))
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_invoice(&self, id: InvoiceId) -> Result<(), PortError> {
        let deleted = self
            .repository
            .delete(id.value())
            .await
            .map_err(db_to_port_error)?;

        if deleted == 0 {
            return Err(PortError::not_found("Invoice", id));
        }
        Ok(())
    }
}

fn row_to_invoice(row: InvoiceRow) -> Invoice {
    Invoice {
        id: InvoiceId::new(row.id),
        comp_code: CompanyCode::new(row.comp_code),
        amt: row.amt,
        paid: row.paid,
        add_date: row.add_date,
        paid_date: row.paid_date,
    }
}
