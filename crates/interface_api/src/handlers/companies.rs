//! Company handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use core_kernel::CompanyCode;
use domain_company::{CompanyChanges, NewCompany};

use crate::dto::{
    CompanyDetailResponse, CompanyListResponse, CompanyRequest, CompanyResponse, StatusResponse,
};
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::AppState;

/// `GET /companies`
pub async fn list_companies(
    State(state): State<AppState>,
) -> Result<Json<CompanyListResponse>, ApiError> {
    let companies = state.companies.list_companies().await?;
    Ok(Json(CompanyListResponse { companies }))
}

/// `GET /companies/:code`
pub async fn get_company(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<CompanyDetailResponse>, ApiError> {
    let company = state.companies.get_company(&CompanyCode::new(code)).await?;
    Ok(Json(CompanyDetailResponse { company }))
}

/// `POST /companies`
///
/// The code is derived from the name; a name that slugs to an existing code
/// fails in the store.
pub async fn create_company(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CompanyRequest>,
) -> Result<(StatusCode, Json<CompanyResponse>), ApiError> {
    let new_company = NewCompany::from_input(request.name, request.description)?;

    let company = state.companies.create_company(new_company).await?;
    info!(code = %company.code, "Company created");

    Ok((StatusCode::CREATED, Json(CompanyResponse { company })))
}

/// `PUT /companies/:code`
pub async fn update_company(
    State(state): State<AppState>,
    Path(code): Path<String>,
    ApiJson(request): ApiJson<CompanyRequest>,
) -> Result<Json<CompanyResponse>, ApiError> {
    let changes = CompanyChanges::from_input(request.name, request.description)?;

    let company = state
        .companies
        .update_company(&CompanyCode::new(code), changes)
        .await?;

    Ok(Json(CompanyResponse { company }))
}

/// `DELETE /companies/:code`
pub async fn delete_company(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatusResponse>, ApiError> {
    let code = CompanyCode::new(code);
    state.companies.delete_company(&code).await?;
    info!(%code, "Company deleted");

    Ok(Json(StatusResponse::deleted()))
}
