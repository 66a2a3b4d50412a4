//! API request handlers

pub mod companies;
pub mod invoices;
pub mod industries;
pub mod health;
pub mod fallback;
