//! Repository implementations
//!
//! Repositories own the SQL. Each method runs a single parameterized
//! statement and returns plain row structs; mapping to domain types happens
//! in the adapters.

pub mod company;
pub mod invoice;
pub mod industry;

pub use company::CompanyRepository;
pub use invoice::InvoiceRepository;
pub use industry::IndustryRepository;
