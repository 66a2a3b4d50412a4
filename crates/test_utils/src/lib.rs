//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! BizTime test suite.
//!
//! # Modules
//!
//! - `memory`: In-memory adapters for every domain port
//! - `fixtures`: Pre-built test data for companies, invoices and industries
//! - `builders`: Builder patterns for request input with generated defaults
//! - `database`: PostgreSQL container management for adapter tests
//! - `generators`: Property-based test data generators

pub mod memory;
pub mod fixtures;
pub mod builders;
pub mod database;
pub mod generators;

pub use memory::InMemoryStore;
pub use fixtures::*;
pub use builders::*;
pub use database::*;
pub use generators::*;
