// src/gui/actions/mod.rs
pub mod fetch;
pub mod filter;
pub mod scrape;
