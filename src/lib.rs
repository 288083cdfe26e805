// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod api;
pub mod catalog;
pub mod config;
pub mod filters;
pub mod gui;
pub mod results;
