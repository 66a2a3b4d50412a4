//! Company Domain Ports
//!
//! The `CompanyPort` trait is everything the company handlers need from
//! their data collaborator. The PostgreSQL adapter lives in `infra_db`; an
//! in-memory adapter for tests lives in `test_utils`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_company::CompanyPort;
//! use std::sync::Arc;
//!
//! let companies: Arc<dyn CompanyPort> = Arc::new(PostgresCompanyAdapter::new(pool));
//! let detail = companies.get_company(&code).await?;
//! ```

use async_trait::async_trait;

use core_kernel::{CompanyCode, DomainPort, PortError};

use crate::company::{Company, CompanyChanges, CompanyDetail, CompanySummary, NewCompany};

/// Port for company persistence
#[async_trait]
pub trait CompanyPort: DomainPort {
    /// Lists every company in natural storage order
    async fn list_companies(&self) -> Result<Vec<CompanySummary>, PortError>;

    /// Loads a company with its invoice ids and industry codes
    ///
    /// # Errors
    ///
    /// `PortError::NotFound` if no company has this code
    async fn get_company(&self, code: &CompanyCode) -> Result<CompanyDetail, PortError>;

    /// Inserts a company
    ///
    /// # Errors
    ///
    /// `PortError::Conflict` if the code is already taken
    async fn create_company(&self, company: NewCompany) -> Result<Company, PortError>;

    /// Replaces the name and description of a company
    ///
    /// # Errors
    ///
    /// `PortError::NotFound` if no company has this code
    async fn update_company(
        &self,
        code: &CompanyCode,
        changes: CompanyChanges,
    ) -> Result<Company, PortError>;

    /// Deletes a company; its invoices and industry links go with it
    ///
    /// # Errors
    ///
    /// `PortError::NotFound` if no company has this code
    async fn delete_company(&self, code: &CompanyCode) -> Result<(), PortError>;

    /// Resolves a company's display name to its code
    async fn find_code_by_name(&self, name: &str) -> Result<Option<CompanyCode>, PortError>;
}
