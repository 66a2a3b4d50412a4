//! Pre-built Test Fixtures
//!
//! Fixed companies, invoices and industries for tests that need predictable
//! data. The names match the sample data BizTime is usually seeded with.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{CompanyCode, IndustryCode, PortError};
use domain_billing::{InvoicePort, NewInvoice};
use domain_company::{CompanyPort, NewCompany};
use domain_industry::{IndustryPort, NewIndustry};

/// Fixture for company test data
pub struct CompanyFixtures;

impl CompanyFixtures {
    pub fn apple() -> NewCompany {
        Self::company("apple", "Apple Computer", "Maker of OSX.")
    }

    pub fn ibm() -> NewCompany {
        Self::company("ibm", "IBM", "Big blue.")
    }

    fn company(code: &str, name: &str, description: &str) -> NewCompany {
        NewCompany {
            code: CompanyCode::new(code),
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

/// Fixture for industry test data
pub struct IndustryFixtures;

impl IndustryFixtures {
    pub fn technology() -> NewIndustry {
        NewIndustry {
            code: IndustryCode::new("tech"),
            name: "Technology".to_string(),
        }
    }

    pub fn accounting() -> NewIndustry {
        NewIndustry {
            code: IndustryCode::new("acct"),
            name: "Accounting".to_string(),
        }
    }
}

/// Fixture for invoice test data
pub struct InvoiceFixtures;

impl InvoiceFixtures {
    /// Date every fixture invoice is raised on
    pub fn add_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    pub fn invoice(comp_code: &str, amt: Decimal) -> NewInvoice {
        NewInvoice {
            comp_code: CompanyCode::new(comp_code),
            amt,
            add_date: Self::add_date(),
        }
    }
}

/// Seeds a data store through its three ports
///
/// Produces apple and ibm, four invoices (ids 1..=3 for apple, 4 for ibm),
/// the Technology and Accounting industries, and links apple and ibm to
/// Technology. Accounting is left without members.
pub async fn seed_sample_data(
    companies: &dyn CompanyPort,
    invoices: &dyn InvoicePort,
    industries: &dyn IndustryPort,
) -> Result<(), PortError> {
    companies.create_company(CompanyFixtures::apple()).await?;
    companies.create_company(CompanyFixtures::ibm()).await?;

    for amt in [dec!(100), dec!(200), dec!(300)] {
        invoices.create_invoice(InvoiceFixtures::invoice("apple", amt)).await?;
    }
    invoices.create_invoice(InvoiceFixtures::invoice("ibm", dec!(400))).await?;

    industries.create_industry(IndustryFixtures::technology()).await?;
    industries.create_industry(IndustryFixtures::accounting()).await?;

    let tech = IndustryFixtures::technology().code;
    industries.link_company(&CompanyCode::new("apple"), &tech).await?;
    industries.link_company(&CompanyCode::new("ibm"), &tech).await?;

    Ok(())
}
