//! Company repository implementation

use sqlx::PgPool;
use tracing::debug;

use crate::error::DatabaseError;

/// Repository for the `companies` table
#[derive(Debug, Clone)]
pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    /// Creates a new CompanyRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists code and name of every company
    pub async fn list(&self) -> Result<Vec<CompanySummaryRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, CompanySummaryRow>(
            r#"
            SELECT code, name
            FROM companies
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Loads a company left-joined to its industry links
    ///
    /// Returns one row per linked industry, or a single row with no industry
    /// code when the company has none. An empty result means the company does
    /// not exist.
    pub async fn find_with_industries(
        &self,
        code: &str,
    ) -> Result<Vec<CompanyIndustryRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, CompanyIndustryRow>(
            r#"
            SELECT
                companies.code,
                companies.name,
                companies.description,
                companies_industries.industry_code
            FROM companies
            LEFT JOIN companies_industries
                ON companies.code = companies_industries.company_code
            WHERE companies.code = $1
            "#,
        )
        .bind(code)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Lists the ids of invoices owned by a company, ascending
    pub async fn invoice_ids(&self, code: &str) -> Result<Vec<i32>, DatabaseError> {
        let ids = sqlx::query_scalar::<_, i32>(
            r#"
            SELECT id
            FROM invoices
            WHERE comp_code = $1
            ORDER BY id
            "#,
        )
        .bind(code)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }

    /// Inserts a company and returns the stored row
    pub async fn insert(
        &self,
        code: &str,
        name: &str,
        description: &str,
    ) -> Result<CompanyRow, DatabaseError> {
        debug!(code, "Inserting company");

        let row = sqlx::query_as::<_, CompanyRow>(
            r#"
            INSERT INTO companies (code, name, description)
            VALUES ($1, $2, $3)
            RETURNING code, name, description
            "#,
        )
        .bind(code)
        .bind(name)
        .bind(description)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Updates name and description; `None` if no company has the code
    pub async fn update(
        &self,
        code: &str,
        name: &str,
        description: &str,
    ) -> Result<Option<CompanyRow>, DatabaseError> {
        let row = sqlx::query_as::<_, CompanyRow>(
            r#"
            UPDATE companies
            SET name = $1, description = $2
            WHERE code = $3
            RETURNING code, name, description
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Deletes a company, returning the number of rows removed
    ///
    /// Invoices and industry links are removed by `ON DELETE CASCADE`.
    pub async fn delete(&self, code: &str) -> Result<u64, DatabaseError> {
        let result = sqlx::query(
            r#"
            DELETE FROM companies
            WHERE code = $1
            "#,
        )
        .bind(code)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Looks up a company code by display name
    pub async fn find_code_by_name(&self, name: &str) -> Result<Option<String>, DatabaseError> {
        let code = sqlx::query_scalar::<_, String>(
            r#"
            SELECT code
            FROM companies
            WHERE name = $1
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(code)
    }
}

/// Database row for a full company
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CompanyRow {
    pub code: String,
    pub name: String,
    pub description: String,
}

/// Database row for the company listing
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CompanySummaryRow {
    pub code: String,
    pub name: String,
}

/// Database row for a company joined to one of its industry links
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CompanyIndustryRow {
    pub code: String,
    pub name: String,
    pub description: String,
    pub industry_code: Option<String>,
}
