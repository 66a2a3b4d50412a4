//! Test Data Builders
//!
//! Builders for request input. Unset fields fall back to generated values
//! from `fake`, so tests only spell out what they assert on.

use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::{Sentence, Words};
use fake::Fake;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_company::NewCompany;
use domain_industry::NewIndustry;

/// Builder for [`NewCompany`]
#[derive(Debug, Default)]
pub struct NewCompanyBuilder {
    name: Option<String>,
    description: Option<String>,
}

impl NewCompanyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the display name; the code is derived from it
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds the input, generating a name until one yields a usable code
    pub fn build(self) -> NewCompany {
        let description = self
            .description
            .unwrap_or_else(|| Sentence(3..8).fake::<String>());

        match self.name {
            Some(name) => NewCompany::from_input(Some(name), Some(description))
                .expect("builder name must yield a company code"),
            None => loop {
                let name: String = CompanyName().fake();
                if let Ok(company) = NewCompany::from_input(Some(name), Some(description.clone())) {
                    break company;
                }
            },
        }
    }
}

/// Builder for [`NewIndustry`]
#[derive(Debug, Default)]
pub struct NewIndustryBuilder {
    name: Option<String>,
}

impl NewIndustryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn build(self) -> NewIndustry {
        let name = self
            .name
            .unwrap_or_else(|| Words(1..3).fake::<Vec<String>>().join(" "));
        NewIndustry::from_input(Some(name)).expect("builder name must yield an industry code")
    }
}

/// Builder for the JSON body of `PUT /invoices/:id`
#[derive(Debug, Clone, Copy)]
pub struct PaymentBuilder {
    amt: Decimal,
    paid: Decimal,
}

impl Default for PaymentBuilder {
    fn default() -> Self {
        Self {
            amt: dec!(2000),
            paid: dec!(500),
        }
    }
}

impl PaymentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amt(mut self, amt: Decimal) -> Self {
        self.amt = amt;
        self
    }

    pub fn paid(mut self, paid: Decimal) -> Self {
        self.paid = paid;
        self
    }

    /// Pays off the whole amount
    pub fn in_full(mut self) -> Self {
        self.paid = self.amt;
        self
    }

    pub fn build(self) -> domain_billing::PaymentUpdate {
        domain_billing::PaymentUpdate {
            amt: self.amt,
            paid: self.paid,
        }
    }
}
