//! Industry records and request input

use serde::{Deserialize, Serialize};

use core_kernel::{required_text, CompanyCode, IndustryCode};

use crate::error::IndustryError;

/// A stored industry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Industry {
    pub code: IndustryCode,
    /// Display name, also the grouping key of the listing
    pub name: String,
}

/// Input for creating an industry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIndustry {
    pub code: IndustryCode,
    pub name: String,
}

impl NewIndustry {
    /// Validates the name and derives the code from it
    pub fn from_input(name: Option<String>) -> Result<Self, IndustryError> {
        let name = required_text("name", name)?;

        let code = IndustryCode::from_name(&name);
        if code.is_empty() {
            return Err(IndustryError::UnusableName(name));
        }

        Ok(Self { code, name })
    }
}

/// One row of the industries ⟕ companies join
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipRow {
    pub industry: String,
    /// `None` when the industry has no linked companies
    pub company_code: Option<CompanyCode>,
}

/// An industry with the codes of its member companies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryListing {
    pub industry: String,
    pub companies: Vec<CompanyCode>,
}

/// Request to link a company to an industry, both named by display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyLink {
    pub industry: String,
    pub company: String,
}

impl CompanyLink {
    pub fn from_input(
        industry: Option<String>,
        company: Option<String>,
    ) -> Result<Self, IndustryError> {
        Ok(Self {
            industry: required_text("industry", industry)?,
            company: required_text("company", company)?,
        })
    }
}
