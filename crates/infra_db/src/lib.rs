//! Infrastructure Database Layer
//!
//! This crate is the PostgreSQL collaborator of the BizTime API, built on
//! SQLx. Every statement is parameterized; no query spans a transaction.
//!
//! # Architecture
//!
//! - **Repositories** own the SQL and map rows to plain row structs
//! - **Adapters** implement the domain ports on top of the repositories and
//!   translate `DatabaseError` into `PortError`
//!
//! # Tables
//!
//! `companies`, `invoices`, `industries` and the join table
//! `companies_industries`; deleting a company cascades to its invoices and
//! links. The schema lives in `migrations/` at the workspace root.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, DatabaseConfig};
//! use infra_db::adapters::PostgresCompanyAdapter;
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/biztime")).await?;
//! let companies = PostgresCompanyAdapter::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod repositories;
pub mod adapters;

pub use pool::{DatabasePool, create_pool, DatabaseConfig};
pub use error::DatabaseError;
