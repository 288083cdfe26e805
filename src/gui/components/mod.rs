// src/gui/components/mod.rs
pub mod filter_panel;
pub mod query_panel;
pub mod results_view;
