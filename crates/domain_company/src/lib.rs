//! Company Domain
//!
//! Companies are the owners of invoices and the members of industries. A
//! company is keyed by a slug derived from its name at creation time; the
//! key never changes afterwards, only the name and description do.
//!
//! # Example
//!
//! ```rust
//! use domain_company::NewCompany;
//!
//! let company = NewCompany::from_input(
//!     Some("Apple Computer".to_string()),
//!     Some("Maker of OSX.".to_string()),
//! ).unwrap();
//!
//! assert_eq!(company.code.as_str(), "apple-computer");
//! ```

pub mod company;
pub mod error;
pub mod ports;

pub use company::{Company, CompanySummary, CompanyDetail, NewCompany, CompanyChanges};
pub use error::CompanyError;
pub use ports::CompanyPort;
