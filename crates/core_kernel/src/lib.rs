//! Core Kernel - Foundational types shared by every BizTime crate
//!
//! This crate provides the building blocks used across the domain modules:
//! - Slug derivation for human-readable keys
//! - Typed identifiers for companies, industries and invoices
//! - Port error types and marker traits for the ports-and-adapters seams
//! - Presence checks for request input

pub mod slug;
pub mod identifiers;
pub mod ports;
pub mod error;
pub mod validation;

pub use slug::slugify;
pub use identifiers::{CompanyCode, IndustryCode, InvoiceId, IdentifierError};
pub use ports::{
    PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth,
};
pub use error::CoreError;
pub use validation::{required, required_text};
