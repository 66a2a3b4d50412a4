//! Strongly-typed identifiers for domain entities
//!
//! Companies and industries are keyed by slugs, invoices by a serial integer.
//! Newtype wrappers keep a company code from being passed where an industry
//! code is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::slug::slugify;

/// Errors produced when parsing an identifier from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("Invalid invoice id: {0}")]
    InvalidInvoiceId(String),
}

macro_rules! define_code {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an existing code as-is (e.g. taken from a URL path)
            pub fn new(code: impl Into<String>) -> Self {
                Self(code.into())
            }

            /// Derives the code from a display name
            pub fn from_name(name: &str) -> Self {
                Self(slugify(name))
            }

            /// Returns the code as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns true if the code holds no characters
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Consumes the wrapper, returning the inner string
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(code: String) -> Self {
                Self(code)
            }
        }

        impl From<&str> for $name {
            fn from(code: &str) -> Self {
                Self(code.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_code!(CompanyCode);
define_code!(IndustryCode);

/// Serial identifier of an invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(i32);

impl InvoiceId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for InvoiceId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .map(Self)
            .map_err(|_| IdentifierError::InvalidInvoiceId(s.to_string()))
    }
}

impl From<i32> for InvoiceId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<InvoiceId> for i32 {
    fn from(id: InvoiceId) -> i32 {
        id.0
    }
}
