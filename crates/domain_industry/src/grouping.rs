//! Aggregation of join rows into industry listings

use indexmap::IndexMap;

use core_kernel::CompanyCode;

use crate::industry::{IndustryListing, MembershipRow};

/// Folds join rows into one listing per industry
///
/// Industries appear in the order they are first seen. A row without a
/// company still produces its industry, with an empty company list.
pub fn group_by_industry<I>(rows: I) -> Vec<IndustryListing>
where
    I: IntoIterator<Item = MembershipRow>,
{
    let mut groups: IndexMap<String, Vec<CompanyCode>> = IndexMap::new();

    for row in rows {
        let companies = groups.entry(row.industry).or_default();
        if let Some(code) = row.company_code {
            companies.push(code);
        }
    }

    groups
        .into_iter()
        .map(|(industry, companies)| IndustryListing { industry, companies })
        .collect()
}
