//! Health and fitness tracking core: SQLite-backed records, aggregate
//! queries, rule-based recommendations and synthetic sample data.

pub mod config;
pub mod error;
pub mod name_generator;
pub mod query;
pub mod recommendation;
pub mod records;
pub mod report;
pub mod rng;
pub mod seed;
pub mod store;
pub mod types;
pub mod window;
