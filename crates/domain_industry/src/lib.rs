//! Industry Domain
//!
//! Industries group companies through a many-to-many link. The listing of
//! industries is built from a left join of industries to their member
//! companies, folded into one entry per industry by [`group_by_industry`].

pub mod industry;
pub mod grouping;
pub mod error;
pub mod ports;

pub use industry::{Industry, NewIndustry, IndustryListing, MembershipRow, CompanyLink};
pub use grouping::group_by_industry;
pub use error::IndustryError;
pub use ports::IndustryPort;
