//! Catch-all for unmatched routes

use crate::error::ApiError;

pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}
