//! PostgreSQL Industry Adapter

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use core_kernel::{CompanyCode, DomainPort, IndustryCode, PortError};
use domain_industry::{Industry, IndustryPort, MembershipRow, NewIndustry};

use super::db_to_port_error;
use crate::repositories::industry::IndustryRepository;

/// PostgreSQL-backed implementation of the IndustryPort trait
#[derive(Debug, Clone)]
pub struct PostgresIndustryAdapter {
    repository: IndustryRepository,
}

impl PostgresIndustryAdapter {
    /// Creates a new PostgreSQL industry adapter
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: IndustryRepository::new(pool),
        }
    }
}

impl DomainPort for PostgresIndustryAdapter {}

#[async_trait]
impl IndustryPort for PostgresIndustryAdapter {
    #[instrument(skip(self))]
    async fn membership_rows(&self) -> Result<Vec<MembershipRow>, PortError> {
        let rows = self.repository.membership().await.map_err(db_to_port_error)?;

        Ok(rows
            .into_iter()
            .map(|row| MembershipRow {
                industry: row.industry,
                company_code: row.code.map(CompanyCode::new),
            })
            .collect())
    }

    #[instrument(skip(self, industry), fields(code = %industry.code))]
    async fn create_industry(&self, industry: NewIndustry) -> Result<Industry, PortError> {
        let row = self
            .repository
            .insert(industry.code.as_str(), &industry.name)
            .await
            .map_err(db_to_port_error)?;

        Ok(Industry {
            code: IndustryCode::new(row.ind_code),
            name: row.industry,
        })
    }

    #[instrument(skip(self))]
    async fn find_code_by_name(&self, name: &str) -> Result<Option<IndustryCode>, PortError> {
        let code = self
            .repository
            .find_code_by_name(name)
            .await
            .map_err(db_to_port_error)?;

        Ok(code.map(IndustryCode::new))
    }

    #[instrument(skip(self), fields(company = %company, industry = %industry))]
    async fn link_company(
        &self,
        company: &CompanyCode,
        industry: &IndustryCode,
    ) -> Result<(), PortError> {
        self.repository
            .link(company.as_str(), industry.as_str())
            .await
            .map_err(db_to_port_error)
    }
}
