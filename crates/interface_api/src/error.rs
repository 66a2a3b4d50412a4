//! API error handling
//!
//! Every handler failure ends up as an [`ApiError`], rendered as
//! `{"error": {"message": ..., "status": ...}}` with the matching HTTP status.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use core_kernel::PortError;
use domain_billing::BillingError;
use domain_company::CompanyError;
use domain_industry::IndustryError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required request field was absent
    #[error("Missing Data")]
    BadRequest,

    /// The addressed company or invoice does not exist
    #[error("Page Not Found")]
    NotFound,

    /// A name given for a company/industry link resolved to nothing
    #[error("Data Not Found")]
    RelationshipNotFound,

    /// No route matched the request
    #[error("Not Found")]
    RouteNotFound,

    /// The body could not be read as JSON of the expected shape
    #[error("{0}")]
    InvalidBody(String),

    /// Anything else, including store failures
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request() -> Self {
        ApiError::BadRequest
    }

    pub fn not_found() -> Self {
        ApiError::NotFound
    }

    pub fn relationship_not_found() -> Self {
        ApiError::RelationshipNotFound
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }

    /// HTTP status the error is reported with
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound | ApiError::RelationshipNotFound | ApiError::RouteNotFound => {
                StatusCode::NOT_FOUND
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub status: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            error!(status = status.as_u16(), %message, "Request failed");
        } else {
            warn!(status = status.as_u16(), %message, "Request rejected");
        }

        let body = ErrorResponse {
            error: ErrorBody {
                message,
                status: status.as_u16(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Store failures are unclassified at the HTTP level except for a missing row
impl From<PortError> for ApiError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::NotFound { .. } => ApiError::NotFound,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<CompanyError> for ApiError {
    fn from(_: CompanyError) -> Self {
        ApiError::BadRequest
    }
}

impl From<BillingError> for ApiError {
    fn from(err: BillingError) -> Self {
        match err {
            BillingError::MissingField(_) => ApiError::BadRequest,
            other => ApiError::InvalidBody(other.to_string()),
        }
    }
}

impl From<IndustryError> for ApiError {
    fn from(_: IndustryError) -> Self {
        ApiError::BadRequest
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ApiError::BadRequest.to_string(), "Missing Data");
        assert_eq!(ApiError::NotFound.to_string(), "Page Not Found");
        assert_eq!(ApiError::RelationshipNotFound.to_string(), "Data Not Found");
        assert_eq!(ApiError::RouteNotFound.to_string(), "Not Found");
    }

    #[test]
    fn test_statuses() {
        assert_eq!(ApiError::BadRequest.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::RelationshipNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal("boom".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_port_not_found_is_page_not_found() {
        let err: ApiError = PortError::not_found("Company", "apple").into();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn test_port_conflict_is_internal() {
        let err: ApiError = PortError::conflict("duplicate key value").into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("duplicate key value"));
    }

    #[test]
    fn test_billing_overflow_is_invalid_body() {
        use rust_decimal::Decimal;

        let err: ApiError = BillingError::AmountOutOfRange {
            amt: Decimal::MAX,
            paid: Decimal::MIN,
        }
        .into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().starts_with("Amount out of range"));
    }

    #[test]
    fn test_response_status() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
