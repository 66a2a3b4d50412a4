//! Industry handlers

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use domain_industry::{group_by_industry, CompanyLink, NewIndustry};

use crate::dto::{
    AddCompanyRequest, CreateIndustryRequest, IndustryListResponse, IndustryResponse,
    StatusResponse,
};
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::AppState;

/// `GET /industries`
pub async fn list_industries(
    State(state): State<AppState>,
) -> Result<Json<IndustryListResponse>, ApiError> {
    let rows = state.industries.membership_rows().await?;
    Ok(Json(IndustryListResponse {
        industries: group_by_industry(rows),
    }))
}

/// `POST /industries`
pub async fn create_industry(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateIndustryRequest>,
) -> Result<(StatusCode, Json<IndustryResponse>), ApiError> {
    let new_industry = NewIndustry::from_input(request.name)?;

    let industry = state.industries.create_industry(new_industry).await?;
    info!(code = %industry.code, "Industry created");

    Ok((StatusCode::CREATED, Json(IndustryResponse { industry })))
}

/// `POST /industries/addCompany`
///
/// Both sides are looked up by display name before the link is inserted.
pub async fn add_company(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AddCompanyRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    let link = CompanyLink::from_input(request.industry, request.company)?;

    let company = state
        .companies
        .find_code_by_name(&link.company)
        .await?
        .ok_or_else(ApiError::relationship_not_found)?;
    let industry = state
        .industries
        .find_code_by_name(&link.industry)
        .await?
        .ok_or_else(ApiError::relationship_not_found)?;

    state.industries.link_company(&company, &industry).await?;
    info!(%company, %industry, "Company linked to industry");

    Ok(Json(StatusResponse::relationship_added()))
}
