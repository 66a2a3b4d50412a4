//! PostgreSQL Company Adapter

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use core_kernel::{CompanyCode, DomainPort, IndustryCode, InvoiceId, PortError};
use domain_company::{
    Company, CompanyChanges, CompanyDetail, CompanyPort, CompanySummary, NewCompany,
};

use super::db_to_port_error;
use crate::repositories::company::{CompanyRepository, CompanyRow};

/// PostgreSQL-backed implementation of the CompanyPort trait
#[derive(Debug, Clone)]
pub struct PostgresCompanyAdapter {
    repository: CompanyRepository,
}

impl PostgresCompanyAdapter {
    /// Creates a new PostgreSQL company adapter
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CompanyRepository::new(pool),
        }
    }
}

impl DomainPort for PostgresCompanyAdapter {}

#[async_trait]
impl CompanyPort for PostgresCompanyAdapter {
    #[instrument(skip(self))]
    async fn list_companies(&self) -> Result<Vec<CompanySummary>, PortError> {
        let rows = self.repository.list().await.map_err(db_to_port_error)?;

        Ok(rows
            .into_iter()
            .map(|row| CompanySummary {
                code: CompanyCode::new(row.code),
                name: row.name,
            })
            .collect())
    }

    #[instrument(skip(self), fields(code = %code))]
    async fn get_company(&self, code: &CompanyCode) -> Result<CompanyDetail, PortError> {
        let rows = self
            .repository
            .find_with_industries(code.as_str())
            .await
            .map_err(db_to_port_error)?;

        let first = rows
            .first()
            .ok_or_else(|| PortError::not_found("Company", code))?;

        let company = Company {
            code: CompanyCode::new(first.code.clone()),
            name: first.name.clone(),
            description: first.description.clone(),
        };

        let industry_codes = rows
            .into_iter()
            .filter_map(|row| row.industry_code.map(IndustryCode::new))
            .collect();

        let invoices = self
            .repository
            .invoice_ids(code.as_str())
            .await
            .map_err(db_to_port_error)?
            .into_iter()
            .map(InvoiceId::new)
            .collect();

        Ok(CompanyDetail {
            company,
            invoices,
            industry_codes,
        })
    }

    #[instrument(skip(self, company), fields(code = %company.code))]
    async fn create_company(&self, company: NewCompany) -> Result<Company, PortError> {
        let row = self
            .repository
            .insert(company.code.as_str(), &company.name, &company.description)
            .await
            .map_err(db_to_port_error)?;

        Ok(row_to_company(row))
    }

    #[instrument(skip(self, changes), fields(code = %code))]
    async fn update_company(
        &self,
        code: &CompanyCode,
        changes: CompanyChanges,
    ) -> Result<Company, PortError> {
        let row = self
            .repository
            .update(code.as_str(), &changes.name, &changes.description)
            .await
            .map_err(db_to_port_error)?
            .ok_or_else(|| PortError::not_found("Company", code))?;

        Ok(row_to_company(row))
    }

    #[instrument(skip(self), fields(code = %code))]
    async fn delete_company(&self, code: &CompanyCode) -> Result<(), PortError> {
        let deleted = self
            .repository
            .delete(code.as_str())
            .await
            .map_err(db_to_port_error)?;

        if deleted == 0 {
            return Err(PortError::not_found("Company", code));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_code_by_name(&self, name: &str) -> Result<Option<CompanyCode>, PortError> {
        let code = self
            .repository
            .find_code_by_name(name)
            .await
            .map_err(db_to_port_error)?;

        Ok(code.map(CompanyCode::new))
    }
}

fn row_to_company(row: CompanyRow) -> Company {
    Company {
        code: CompanyCode::new(row.code),
        name: row.name,
        description: row.description,
    }
}
