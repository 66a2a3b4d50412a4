//! Domain Adapters
//!
//! PostgreSQL implementations of the domain ports. Each adapter:
//! - Implements its domain's port trait
//! - Converts row types into domain models
//! - Translates `DatabaseError` into `PortError`
//!
//! # Usage
//!
//! ```rust,ignore
//! use infra_db::adapters::PostgresInvoiceAdapter;
//! use domain_billing::InvoicePort;
//!
//! let adapter = PostgresInvoiceAdapter::new(pool);
//! let invoice = adapter.find_invoice(InvoiceId::new(1)).await?;
//! ```

pub mod company;
pub mod invoice;
pub mod industry;
pub mod health;

pub use company::PostgresCompanyAdapter;
pub use invoice::PostgresInvoiceAdapter;
pub use industry::PostgresIndustryAdapter;
pub use health::PostgresHealthCheck;

use core_kernel::PortError;

use crate::error::DatabaseError;

/// Translates a database failure into the port error the domain understands
///
/// - Duplicate keys become `Conflict`
/// - Foreign key and check violations become `Validation`
/// - Connection failures become `Connection`
/// - Everything else is `Internal`
pub(crate) fn db_to_port_error(e: DatabaseError) -> PortError {
    match e {
        DatabaseError::NotFound(msg) => PortError::not_found("Record", msg),
        DatabaseError::DuplicateEntry(msg) => PortError::conflict(msg),
        DatabaseError::ForeignKeyViolation(msg) | DatabaseError::ConstraintViolation(msg) => {
            PortError::validation(msg)
        }
        DatabaseError::ConnectionFailed(_) | DatabaseError::PoolExhausted => {
            PortError::connection(e.to_string())
        }
        DatabaseError::QueryFailed(msg) => PortError::internal(msg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_is_conflict() {
        let err = db_to_port_error(DatabaseError::DuplicateEntry("companies_pkey".to_string()));
        assert!(matches!(err, PortError::Conflict { .. }));
    }

    #[test]
    fn test_check_violation_is_validation() {
        let err = db_to_port_error(DatabaseError::ConstraintViolation("invoices_amt_check".to_string()));
        assert!(matches!(err, PortError::Validation { .. }));
    }

    #[test]
    fn test_pool_exhausted_is_transient() {
        assert!(db_to_port_error(DatabaseError::PoolExhausted).is_transient());
    }
}
