// src/api/mod.rs
pub mod client;
pub mod query;
pub mod types;

pub use client::ApiClient;
pub use types::{Car, GroupedResult, MakeCatalog, MakeFilter};
