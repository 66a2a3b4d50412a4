//! Company DTOs

use serde::{Deserialize, Serialize};

use domain_company::{Company, CompanyDetail, CompanySummary};

/// Body of `POST /companies` and `PUT /companies/:code`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanyRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CompanyListResponse {
    pub companies: Vec<CompanySummary>,
}

#[derive(Debug, Serialize)]
pub struct CompanyResponse {
    pub company: Company,
}

#[derive(Debug, Serialize)]
pub struct CompanyDetailResponse {
    pub company: CompanyDetail,
}
