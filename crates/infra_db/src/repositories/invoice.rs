//! Invoice repository implementation

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::debug;

use crate::error::DatabaseError;

/// Repository for the `invoices` table
#[derive(Debug, Clone)]
pub struct InvoiceRepository {
    pool: PgPool,
}

impl InvoiceRepository {
    /// Creates a new InvoiceRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists id and company code of every invoice
    pub async fn list(&self) -> Result<Vec<InvoiceSummaryRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, InvoiceSummaryRow>(
            r#"
            SELECT id, comp_code
            FROM invoices
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Loads an invoice joined with its owning company
    pub async fn find_with_company(
        &self,
        id: i32,
    ) -> Result<Option<InvoiceCompanyRow>, DatabaseError> {
        let row = sqlx::query_as::<_, InvoiceCompanyRow>(
            r#"
            SELECT
                invoices.id,
                invoices.amt,
                invoices.paid,
                invoices.add_date,
                invoices.paid_date,
                companies.code,
                companies.name,
                companies.description
            FROM invoices
            JOIN companies ON invoices.comp_code = companies.code
            WHERE invoices.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Loads the stored invoice row
    pub async fn find(&self, id: i32) -> Result<Option<InvoiceRow>, DatabaseError> {
        let row = sqlx::query_as::<_, InvoiceRow>(
            r#"
            SELECT id, comp_code, amt, paid, add_date, paid_date
            FROM invoices
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Inserts an unpaid invoice and returns the stored row
    pub async fn insert(
        &self,
        comp_code: &str,
        amt: Decimal,
        add_date: NaiveDate,
    ) -> Result<InvoiceRow, DatabaseError> {
        debug!(comp_code, %amt, "Inserting invoice");

        let row = sqlx::query_as::<_, InvoiceRow>(
            r#"
            INSERT INTO invoices (comp_code, amt, paid, add_date, paid_date)
            VALUES ($1, $2, FALSE, $3, NULL)
            RETURNING id, comp_code, amt, paid, add_date, paid_date
            "#,
        )
        .bind(comp_code)
        .bind(amt)
        .bind(add_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Writes the balance, paid flag and paid date; `None` if the id is unknown
    pub async fn update_balance(
        &self,
        id: i32,
        amt: Decimal,
        paid: bool,
        paid_date: Option<NaiveDate>,
    ) -> Result<Option<InvoiceRow>, DatabaseError> {
        let row = sqlx::query_as::<_, InvoiceRow>(
            r#"
            UPDATE invoices
            SET amt = $1, paid = $2, paid_date = $3
            WHERE id = $4
            RETURNING id, comp_code, amt, paid, add_date, paid_date
            "#,
        )
        .bind(amt)
        .bind(paid)
        .bind(paid_date)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Deletes an invoice, returning the number of rows removed
    pub async fn delete(&self, id: i32) -> Result<u64, DatabaseError> {
        let result = sqlx::query(
            r#"
            DELETE FROM invoices
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}

/// Database row for an invoice
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct InvoiceRow {
    pub id: i32,
    pub comp_code: String,
    pub amt: Decimal,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

/// Database row for the invoice listing
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct InvoiceSummaryRow {
    pub id: i32,
    pub comp_code: String,
}

/// Database row for an invoice joined with its company
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct InvoiceCompanyRow {
    pub id: i32,
    pub amt: Decimal,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    pub code: String,
    pub name: String,
    pub description: String,
}
