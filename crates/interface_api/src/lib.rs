//! HTTP API Layer
//!
//! This crate provides the REST API for BizTime using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: One module per resource (companies, invoices, industries)
//! - **DTOs**: Request bodies and response envelopes
//! - **Error Handling**: Every failure renders as `{"error": {"message", "status"}}`
//! - **Middleware**: Request logging
//!
//! Handlers never touch the database directly. They receive the domain ports
//! through [`AppState`], so the same router runs against PostgreSQL in the
//! server binary and against in-memory adapters in tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(AppState::postgres(pool));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use core_kernel::HealthCheckable;
use domain_billing::InvoicePort;
use domain_company::CompanyPort;
use domain_industry::IndustryPort;
use infra_db::DatabasePool;
use infra_db::adapters::{
    PostgresCompanyAdapter, PostgresHealthCheck, PostgresIndustryAdapter, PostgresInvoiceAdapter,
};

use crate::handlers::{companies, fallback, health, industries, invoices};
use crate::middleware::request_logging_middleware;

/// Application state shared across handlers
///
/// Holds the data collaborators the handlers depend on.
#[derive(Clone)]
pub struct AppState {
    pub companies: Arc<dyn CompanyPort>,
    pub invoices: Arc<dyn InvoicePort>,
    pub industries: Arc<dyn IndustryPort>,
    pub health: Arc<dyn HealthCheckable>,
}

impl AppState {
    /// Builds the state from explicit port implementations
    pub fn new(
        companies: Arc<dyn CompanyPort>,
        invoices: Arc<dyn InvoicePort>,
        industries: Arc<dyn IndustryPort>,
        health: Arc<dyn HealthCheckable>,
    ) -> Self {
        Self {
            companies,
            invoices,
            industries,
            health,
        }
    }

    /// Builds the state from one store implementing every port
    pub fn shared<S>(store: Arc<S>) -> Self
    where
        S: CompanyPort + InvoicePort + IndustryPort + HealthCheckable,
    {
        Self::new(store.clone(), store.clone(), store.clone(), store)
    }

    /// Builds the state with the PostgreSQL adapters sharing one pool
    pub fn postgres(pool: DatabasePool) -> Self {
        Self::new(
            Arc::new(PostgresCompanyAdapter::new(pool.clone())),
            Arc::new(PostgresInvoiceAdapter::new(pool.clone())),
            Arc::new(PostgresIndustryAdapter::new(pool.clone())),
            Arc::new(PostgresHealthCheck::new(pool)),
        )
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Ports the handlers run against
///
/// # Returns
///
/// Configured Axum router with all routes, the not-found fallback and middleware
pub fn create_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let company_routes = Router::new()
        .route("/", get(companies::list_companies).post(companies::create_company))
        .route(
            "/:code",
            get(companies::get_company)
                .put(companies::update_company)
                .delete(companies::delete_company),
        );

    let invoice_routes = Router::new()
        .route("/", get(invoices::list_invoices).post(invoices::create_invoice))
        .route(
            "/:id",
            get(invoices::get_invoice)
                .put(invoices::update_invoice)
                .delete(invoices::delete_invoice),
        );

    let industry_routes = Router::new()
        .route("/", get(industries::list_industries).post(industries::create_industry))
        .route("/addCompany", post(industries::add_company));

    Router::new()
        .merge(health_routes)
        .nest("/companies", company_routes)
        .nest("/invoices", invoice_routes)
        .nest("/industries", industry_routes)
        .fallback(fallback::not_found)
        .layer(axum_middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
