//! Industry domain errors

use core_kernel::CoreError;
use thiserror::Error;

/// Errors raised while building industry input
#[derive(Debug, Error)]
pub enum IndustryError {
    /// A required field was absent or blank
    #[error("{0}")]
    MissingField(#[from] CoreError),

    /// The name holds no characters a code can be derived from
    #[error("Industry name '{0}' yields an empty code")]
    UnusableName(String),
}
