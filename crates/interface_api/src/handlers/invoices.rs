//! Invoice handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{NaiveDate, Utc};
use tracing::info;

use core_kernel::InvoiceId;
use domain_billing::{settle, NewInvoice, PaymentUpdate};

use crate::dto::{
    CreateInvoiceRequest, InvoiceDetailResponse, InvoiceListResponse, InvoiceResponse,
    StatusResponse, UpdateInvoiceRequest,
};
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::AppState;

/// A path segment that is not an integer addresses no invoice
fn parse_id(raw: &str) -> Result<InvoiceId, ApiError> {
    raw.parse().map_err(|_| ApiError::not_found())
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// `GET /invoices`
pub async fn list_invoices(
    State(state): State<AppState>,
) -> Result<Json<InvoiceListResponse>, ApiError> {
    let invoices = state.invoices.list_invoices().await?;
    Ok(Json(InvoiceListResponse { invoices }))
}

/// `GET /invoices/:id`
pub async fn get_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<InvoiceDetailResponse>, ApiError> {
    let invoice = state.invoices.get_invoice(parse_id(&id)?).await?;
    Ok(Json(InvoiceDetailResponse { invoice }))
}

/// `POST /invoices`
pub async fn create_invoice(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateInvoiceRequest>,
) -> Result<(StatusCode, Json<InvoiceResponse>), ApiError> {
    let new_invoice = NewInvoice::from_input(request.comp_code, request.amt, today())?;

    let invoice = state.invoices.create_invoice(new_invoice).await?;
    info!(id = %invoice.id, comp_code = %invoice.comp_code, "Invoice created");

    Ok((StatusCode::CREATED, Json(InvoiceResponse { invoice })))
}

/// `PUT /invoices/:id`
///
/// Reads the stored paid date, settles the payment against it and writes
/// the result back.
pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateInvoiceRequest>,
) -> Result<Json<InvoiceResponse>, ApiError> {
    let update = PaymentUpdate::from_input(request.amt, request.paid)?;
    let id = parse_id(&id)?;

    let current = state.invoices.find_invoice(id).await?;
    let settlement = settle(&update, current.paid_date, today())?;

    let invoice = state.invoices.apply_settlement(id, settlement).await?;
    info!(%id, amt = %invoice.amt, paid = invoice.paid, "Invoice settled");

    Ok(Json(InvoiceResponse { invoice }))
}

/// `DELETE /invoices/:id`
pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StatusResponse>, ApiError> {
    let id = parse_id(&id)?;
    state.invoices.delete_invoice(id).await?;
    info!(%id, "Invoice deleted");

    Ok(Json(StatusResponse::deleted()))
}
