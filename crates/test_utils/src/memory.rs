//! In-memory adapters
//!
//! [`InMemoryStore`] implements every domain port over plain vectors behind
//! a lock. It mirrors the constraints of the PostgreSQL schema so handler
//! tests observe the same failures the database would raise:
//!
//! - unique company code and name, unique industry code and name
//! - invoices and links must reference existing rows
//! - `invoices.amt` must be positive and is stored with two decimal places
//! - deleting a company removes its invoices and industry links
//! - invoice ids are a serial starting at 1
//!
//! Rows are kept in insertion order, which stands in for the database's
//! natural storage order.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

use core_kernel::{
    AdapterHealth, CompanyCode, DomainPort, HealthCheckResult, HealthCheckable, IndustryCode,
    InvoiceId, PortError,
};
use domain_billing::{
    Invoice, InvoiceDetail, InvoicePort, InvoiceSummary, NewInvoice, Settlement,
};
use domain_company::{
    Company, CompanyChanges, CompanyDetail, CompanyPort, CompanySummary, NewCompany,
};
use domain_industry::{Industry, IndustryPort, MembershipRow, NewIndustry};

#[derive(Debug, Default)]
struct Tables {
    companies: Vec<Company>,
    invoices: Vec<Invoice>,
    industries: Vec<Industry>,
    links: Vec<(CompanyCode, IndustryCode)>,
    last_invoice_id: i32,
}

impl Tables {
    fn company(&self, code: &CompanyCode) -> Option<&Company> {
        self.companies.iter().find(|c| &c.code == code)
    }

    fn has_industry(&self, code: &IndustryCode) -> bool {
        self.industries.iter().any(|i| &i.code == code)
    }
}

/// Shared in-memory implementation of the company, invoice and industry ports
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
    healthy: Arc<AtomicBool>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables::default())),
            healthy: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Makes the health check report the store as down (or up again)
    pub fn set_healthy(&self, healthy: bool) {
        self.healthy.store(healthy, Ordering::SeqCst);
    }

    /// Number of stored invoices
    pub fn invoice_count(&self) -> usize {
        self.tables.read().map(|t| t.invoices.len()).unwrap_or_default()
    }

    /// Number of stored company/industry links
    pub fn link_count(&self) -> usize {
        self.tables.read().map(|t| t.links.len()).unwrap_or_default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, PortError> {
        self.tables
            .read()
            .map_err(|e| PortError::internal(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, PortError> {
        self.tables
            .write()
            .map_err(|e| PortError::internal(format!("Failed to acquire write lock: {}", e)))
    }
}

fn check_amount(amt: Decimal) -> Result<Decimal, PortError> {
    let amt = amt.round_dp(2);
    if amt <= Decimal::ZERO {
        return Err(PortError::validation(
            "new row for relation \"invoices\" violates check constraint \"invoices_amt_check\"",
        ));
    }
    Ok(amt)
}

fn unique_violation(constraint: &str) -> PortError {
    PortError::conflict(format!(
        "duplicate key value violates unique constraint \"{}\"",
        constraint
    ))
}

fn foreign_key_violation(table: &str, constraint: &str) -> PortError {
    PortError::validation(format!(
        "insert or update on table \"{}\" violates foreign key constraint \"{}\"",
        table, constraint
    ))
}

impl DomainPort for InMemoryStore {}

#[async_trait]
impl CompanyPort for InMemoryStore {
    async fn list_companies(&self) -> Result<Vec<CompanySummary>, PortError> {
        let tables = self.read()?;
        Ok(tables.companies.iter().cloned().map(CompanySummary::from).collect())
    }

    async fn get_company(&self, code: &CompanyCode) -> Result<CompanyDetail, PortError> {
        let tables = self.read()?;
        let company = tables
            .company(code)
            .cloned()
            .ok_or_else(|| PortError::not_found("Company", code))?;

        let invoices = tables
            .invoices
            .iter()
            .filter(|i| &i.comp_code == code)
            .map(|i| i.id)
            .collect();
        let industry_codes = tables
            .links
            .iter()
            .filter(|(company, _)| company == code)
            .map(|(_, industry)| industry.clone())
            .collect();

        Ok(CompanyDetail {
            company,
            invoices,
            industry_codes,
        })
    }

    async fn create_company(&self, company: NewCompany) -> Result<Company, PortError> {
        let mut tables = self.write()?;

        if tables.company(&company.code).is_some() {
            return Err(unique_violation("companies_pkey"));
        }
        if tables.companies.iter().any(|c| c.name == company.name) {
            return Err(unique_violation("companies_name_key"));
        }

        let company = company.into_company();
        tables.companies.push(company.clone());
        Ok(company)
    }

    async fn update_company(
        &self,
        code: &CompanyCode,
        changes: CompanyChanges,
    ) -> Result<Company, PortError> {
        let mut tables = self.write()?;

        if tables
            .companies
            .iter()
            .any(|c| &c.code != code && c.name == changes.name)
        {
            return Err(unique_violation("companies_name_key"));
        }

        let company = tables
            .companies
            .iter_mut()
            .find(|c| &c.code == code)
            .ok_or_else(|| PortError::not_found("Company", code))?;

        company.name = changes.name;
        company.description = changes.description;
        Ok(company.clone())
    }

    async fn delete_company(&self, code: &CompanyCode) -> Result<(), PortError> {
        let mut tables = self.write()?;

        let before = tables.companies.len();
        tables.companies.retain(|c| &c.code != code);
        if tables.companies.len() == before {
            return Err(PortError::not_found("Company", code));
        }

        tables.invoices.retain(|i| &i.comp_code != code);
        tables.links.retain(|(company, _)| company != code);
        Ok(())
    }

    async fn find_code_by_name(&self, name: &str) -> Result<Option<CompanyCode>, PortError> {
        let tables = self.read()?;
        Ok(tables
            .companies
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.code.clone()))
    }
}

#[async_trait]
impl InvoicePort for InMemoryStore {
    async fn list_invoices(&self) -> Result<Vec<InvoiceSummary>, PortError> {
        let tables = self.read()?;
        Ok(tables
            .invoices
            .iter()
            .map(|i| InvoiceSummary {
                id: i.id,
                comp_code: i.comp_code.clone(),
            })
            .collect())
    }

    async fn get_invoice(&self, id: InvoiceId) -> Result<InvoiceDetail, PortError> {
        let tables = self.read()?;
        let invoice = tables
            .invoices
            .iter()
            .find(|i| i.id == id)
            .ok_or_else(|| PortError::not_found("Invoice", id))?;
        let company = tables
            .company(&invoice.comp_code)
            .cloned()
            .ok_or_else(|| PortError::not_found("Invoice", id))?;

        Ok(InvoiceDetail {
            id: invoice.id,
            amt: invoice.amt,
            paid: invoice.paid,
            add_date: invoice.add_date,
            paid_date: invoice.paid_date,
            company,
        })
    }

    async fn find_invoice(&self, id: InvoiceId) -> Result<Invoice, PortError> {
        let tables = self.read()?;
        tables
            .invoices
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Invoice", id))
    }

    async fn create_invoice(&self, invoice: NewInvoice) -> Result<Invoice, PortError> {
        let mut tables = self.write()?;

        if tables.company(&invoice.comp_code).is_none() {
            return Err(foreign_key_violation("invoices", "invoices_comp_code_fkey"));
        }
        let amt = check_amount(invoice.amt)?;

        tables.last_invoice_id += 1;
        let stored = Invoice {
            id: InvoiceId::new(tables.last_invoice_id),
            comp_code: invoice.comp_code,
            amt,
            paid: false,
            add_date: invoice.add_date,
            paid_date: None,
        };
        tables.invoices.push(stored.clone());
        Ok(stored)
    }

    async fn apply_settlement(
        &self,
        id: InvoiceId,
        settlement: Settlement,
    ) -> Result<Invoice, PortError> {
        let mut tables = self.write()?;

        let invoice = tables
            .invoices
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| PortError::not_found("Invoice", id))?;

        invoice.amt = check_amount(settlement.amt)?;
        invoice.paid = settlement.paid;
        invoice.paid_date = settlement.paid_date;
        Ok(invoice.clone())
    }

    async fn delete_invoice(&self, id: InvoiceId) -> Result<(), PortError> {
        let mut tables = self.write()?;

        let before = tables.invoices.len();
        tables.invoices.retain(|i| i.id != id);
        if tables.invoices.len() == before {
            return Err(PortError::not_found("Invoice", id));
        }
        Ok(())
    }
}

#[async_trait]
impl IndustryPort for InMemoryStore {
    async fn membership_rows(&self) -> Result<Vec<MembershipRow>, PortError> {
        let tables = self.read()?;

        let mut rows = Vec::new();
        for industry in &tables.industries {
            let members: Vec<_> = tables
                .links
                .iter()
                .filter(|(_, code)| code == &industry.code)
                .map(|(company, _)| company.clone())
                .collect();

            if members.is_empty() {
                rows.push(MembershipRow {
                    industry: industry.name.clone(),
                    company_code: None,
                });
            }
            rows.extend(members.into_iter().map(|company| MembershipRow {
                industry: industry.name.clone(),
                company_code: Some(company),
            }));
        }
        Ok(rows)
    }

    async fn create_industry(&self, industry: NewIndustry) -> Result<Industry, PortError> {
        let mut tables = self.write()?;

        if tables.has_industry(&industry.code) {
            return Err(unique_violation("industries_pkey"));
        }
        if tables.industries.iter().any(|i| i.name == industry.name) {
            return Err(unique_violation("industries_industry_key"));
        }

        let stored = Industry {
            code: industry.code,
            name: industry.name,
        };
        tables.industries.push(stored.clone());
        Ok(stored)
    }

    async fn find_code_by_name(&self, name: &str) -> Result<Option<IndustryCode>, PortError> {
        let tables = self.read()?;
        Ok(tables
            .industries
            .iter()
            .find(|i| i.name == name)
            .map(|i| i.code.clone()))
    }

    async fn link_company(
        &self,
        company: &CompanyCode,
        industry: &IndustryCode,
    ) -> Result<(), PortError> {
        let mut tables = self.write()?;

        if tables.company(company).is_none() {
            return Err(foreign_key_violation(
                "companies_industries",
                "companies_industries_company_code_fkey",
            ));
        }
        if !tables.has_industry(industry) {
            return Err(foreign_key_violation(
                "companies_industries",
                "companies_industries_industry_code_fkey",
            ));
        }
        if tables.links.iter().any(|(c, i)| c == company && i == industry) {
            return Err(unique_violation("companies_industries_pkey"));
        }

        tables.links.push((company.clone(), industry.clone()));
        Ok(())
    }
}

#[async_trait]
impl HealthCheckable for InMemoryStore {
    async fn health_check(&self) -> HealthCheckResult {
        let healthy = self.healthy.load(Ordering::SeqCst);
        HealthCheckResult {
            adapter_id: "in-memory".to_string(),
            status: if healthy {
                AdapterHealth::Healthy
            } else {
                AdapterHealth::Unhealthy
            },
            latency_ms: 0,
            message: (!healthy).then(|| "store marked unavailable".to_string()),
            checked_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn new_company(name: &str) -> NewCompany {
        NewCompany::from_input(Some(name.to_string()), Some("desc".to_string())).unwrap()
    }

    fn new_invoice(code: &str, amt: Decimal) -> NewInvoice {
        NewInvoice {
            comp_code: CompanyCode::new(code),
            amt,
            add_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_duplicate_company_conflicts() {
        let store = InMemoryStore::new();
        store.create_company(new_company("Apple")).await.unwrap();

        let err = store.create_company(new_company("Apple")).await.unwrap_err();
        assert!(matches!(err, PortError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_invoice_ids_are_serial() {
        let store = InMemoryStore::new();
        store.create_company(new_company("Apple")).await.unwrap();

        let first = store.create_invoice(new_invoice("apple", dec!(10))).await.unwrap();
        let second = store.create_invoice(new_invoice("apple", dec!(20))).await.unwrap();
        assert_eq!(first.id.value(), 1);
        assert_eq!(second.id.value(), 2);
    }

    #[tokio::test]
    async fn test_invoice_requires_company_and_positive_amount() {
        let store = InMemoryStore::new();
        let err = store.create_invoice(new_invoice("ghost", dec!(10))).await.unwrap_err();
        assert!(matches!(err, PortError::Validation { .. }));

        store.create_company(new_company("Apple")).await.unwrap();
        let err = store.create_invoice(new_invoice("apple", dec!(0))).await.unwrap_err();
        assert!(matches!(err, PortError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_delete_cascades() {
        let store = InMemoryStore::new();
        store.create_company(new_company("Apple")).await.unwrap();
        store
            .create_industry(NewIndustry::from_input(Some("Tech".to_string())).unwrap())
            .await
            .unwrap();
        store.create_invoice(new_invoice("apple", dec!(10))).await.unwrap();
        store
            .link_company(&CompanyCode::new("apple"), &IndustryCode::new("tech"))
            .await
            .unwrap();

        store.delete_company(&CompanyCode::new("apple")).await.unwrap();
        assert_eq!(store.invoice_count(), 0);
        assert_eq!(store.link_count(), 0);
    }

    #[tokio::test]
    async fn test_health_toggle() {
        let store = InMemoryStore::new();
        assert!(store.health_check().await.is_healthy());
        store.set_healthy(false);
        assert!(!store.health_check().await.is_healthy());
    }
}
