//! Company records and request input

use serde::{Deserialize, Serialize};

use core_kernel::{required_text, CompanyCode, IndustryCode, InvoiceId};

use crate::error::CompanyError;

/// A stored company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub code: CompanyCode,
    pub name: String,
    pub description: String,
}

/// The listing projection of a company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySummary {
    pub code: CompanyCode,
    pub name: String,
}

impl From<Company> for CompanySummary {
    fn from(company: Company) -> Self {
        Self {
            code: company.code,
            name: company.name,
        }
    }
}

/// A company together with the invoices it owns and the industries it
/// belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyDetail {
    #[serde(flatten)]
    pub company: Company,
    /// Ids of invoices whose `comp_code` is this company, ascending
    pub invoices: Vec<InvoiceId>,
    /// Codes of linked industries; empty when the company has none
    pub industry_codes: Vec<IndustryCode>,
}

/// Input for creating a company
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCompany {
    pub code: CompanyCode,
    pub name: String,
    pub description: String,
}

impl NewCompany {
    /// Validates presence of both fields and derives the code from the name
    ///
    /// # Errors
    ///
    /// * `CompanyError::MissingField` if either field is absent or blank
    /// * `CompanyError::UnusableName` if the name slugifies to nothing
    pub fn from_input(
        name: Option<String>,
        description: Option<String>,
    ) -> Result<Self, CompanyError> {
        let name = required_text("name", name)?;
        let description = required_text("description", description)?;

        let code = CompanyCode::from_name(&name);
        if code.is_empty() {
            return Err(CompanyError::UnusableName(name));
        }

        Ok(Self {
            code,
            name,
            description,
        })
    }

    /// Returns the company as it will be stored
    pub fn into_company(self) -> Company {
        Company {
            code: self.code,
            name: self.name,
            description: self.description,
        }
    }
}

/// Input for updating a company's mutable fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyChanges {
    pub name: String,
    pub description: String,
}

impl CompanyChanges {
    pub fn from_input(
        name: Option<String>,
        description: Option<String>,
    ) -> Result<Self, CompanyError> {
        Ok(Self {
            name: required_text("name", name)?,
            description: required_text("description", description)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_company_derives_code() {
        let company = NewCompany::from_input(
            Some("International Business Machines".to_string()),
            Some("Big blue.".to_string()),
        )
        .unwrap();

        assert_eq!(company.code.as_str(), "international-business-machines");
        assert_eq!(company.name, "International Business Machines");
    }

    #[test]
    fn test_new_company_requires_description() {
        let result = NewCompany::from_input(Some("Apple".to_string()), None);
        assert!(matches!(result, Err(CompanyError::MissingField(_))));
    }

    #[test]
    fn test_new_company_rejects_symbol_only_name() {
        let result = NewCompany::from_input(Some("***".to_string()), Some("x".to_string()));
        assert!(matches!(result, Err(CompanyError::UnusableName(_))));
    }

    #[test]
    fn test_detail_serializes_flat() {
        let detail = CompanyDetail {
            company: Company {
                code: CompanyCode::new("ibm"),
                name: "IBM".to_string(),
                description: "Big blue.".to_string(),
            },
            invoices: vec![InvoiceId::new(3)],
            industry_codes: vec![],
        };

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["code"], "ibm");
        assert_eq!(json["invoices"][0], 3);
        assert!(json["industry_codes"].as_array().unwrap().is_empty());
    }
}
