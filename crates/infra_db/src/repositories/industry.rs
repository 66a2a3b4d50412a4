//! Industry repository implementation
//!
//! Covers the `industries` table and the `companies_industries` join table.

use sqlx::PgPool;
use tracing::debug;

use crate::error::DatabaseError;

/// Repository for industries and their company links
#[derive(Debug, Clone)]
pub struct IndustryRepository {
    pool: PgPool,
}

impl IndustryRepository {
    /// Creates a new IndustryRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Left-joins every industry to the codes of its member companies
    pub async fn membership(&self) -> Result<Vec<MembershipDbRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, MembershipDbRow>(
            r#"
            SELECT industries.industry, companies.code
            FROM industries
            LEFT JOIN companies_industries
                ON industries.ind_code = companies_industries.industry_code
            LEFT JOIN companies
                ON companies_industries.company_code = companies.code
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Inserts an industry and returns the stored row
    pub async fn insert(&self, code: &str, name: &str) -> Result<IndustryRow, DatabaseError> {
        debug!(code, "Inserting industry");

        let row = sqlx::query_as::<_, IndustryRow>(
            r#"
            INSERT INTO industries (ind_code, industry)
            VALUES ($1, $2)
            RETURNING ind_code, industry
            "#,
        )
        .bind(code)
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Looks up an industry code by display name
    pub async fn find_code_by_name(&self, name: &str) -> Result<Option<String>, DatabaseError> {
        let code = sqlx::query_scalar::<_, String>(
            r#"
            SELECT ind_code
            FROM industries
            WHERE industry = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(code)
    }

    /// Inserts a company/industry pair into the join table
    pub async fn link(&self, company_code: &str, industry_code: &str) -> Result<(), DatabaseError> {
        debug!(company_code, industry_code, "Linking company to industry");

        sqlx::query(
            r#"
            INSERT INTO companies_industries (company_code, industry_code)
            VALUES ($1, $2)
            "#,
        )
        .bind(company_code)
        .bind(industry_code)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Database row for an industry
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct IndustryRow {
    pub ind_code: String,
    pub industry: String,
}

/// Database row of the industries ⟕ companies join
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MembershipDbRow {
    pub industry: String,
    pub code: Option<String>,
}
