//! Industry DTOs

use serde::{Deserialize, Serialize};

use domain_industry::{Industry, IndustryListing};

/// Body of `POST /industries`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateIndustryRequest {
    pub name: Option<String>,
}

/// Body of `POST /industries/addCompany`, both sides named by display name
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddCompanyRequest {
    pub industry: Option<String>,
    pub company: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct IndustryListResponse {
    pub industries: Vec<IndustryListing>,
}

#[derive(Debug, Serialize)]
pub struct IndustryResponse {
    pub industry: Industry,
}
