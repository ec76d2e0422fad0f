pub mod error;
pub mod filter;
pub mod precision;
pub mod query;
