//! Industry Domain Ports

use async_trait::async_trait;

use core_kernel::{CompanyCode, DomainPort, IndustryCode, PortError};

use crate::industry::{Industry, MembershipRow, NewIndustry};

/// Port for industry persistence
#[async_trait]
pub trait IndustryPort: DomainPort {
    /// Returns every industry left-joined to its member companies
    ///
    /// An industry with no members yields a single row with no company.
    async fn membership_rows(&self) -> Result<Vec<MembershipRow>, PortError>;

    /// Inserts an industry
    ///
    /// # Errors
    ///
    /// `PortError::Conflict` if the code or name is already taken
    async fn create_industry(&self, industry: NewIndustry) -> Result<Industry, PortError>;

    /// Resolves an industry's display name to its code
    async fn find_code_by_name(&self, name: &str) -> Result<Option<IndustryCode>, PortError>;

    /// Links a company to an industry
    ///
    /// # Errors
    ///
    /// `PortError::Conflict` if the pair is already linked
    async fn link_company(
        &self,
        company: &CompanyCode,
        industry: &IndustryCode,
    ) -> Result<(), PortError>;
}
