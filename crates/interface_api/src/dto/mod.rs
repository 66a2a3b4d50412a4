//! Data Transfer Objects for API requests and responses
//!
//! Request bodies keep every field optional so that an absent field is
//! reported as "Missing Data" rather than as a JSON shape error.

pub mod company;
pub mod invoice;
pub mod industry;

use serde::{Deserialize, Serialize};

pub use company::*;
pub use invoice::*;
pub use industry::*;

/// Body of delete and link responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn deleted() -> Self {
        Self {
            status: "Deleted".to_string(),
        }
    }

    pub fn relationship_added() -> Self {
        Self {
            status: "Relationship Added".to_string(),
        }
    }
}
