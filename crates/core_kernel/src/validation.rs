//! Presence checks for request input
//!
//! Requests are only checked for the presence of their required fields; the
//! store enforces everything else.

use crate::error::CoreError;

/// Returns the trimmed text if present and non-blank
///
/// # Errors
///
/// Returns `CoreError::Validation` naming the field when the value is absent,
/// empty or whitespace only.
pub fn required_text(field: &str, value: Option<String>) -> Result<String, CoreError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
        _ => Err(CoreError::validation(format!("{} is required", field))),
    }
}

/// Returns the value if present
pub fn required<T>(field: &str, value: Option<T>) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::validation(format!("{} is required", field)))
}
