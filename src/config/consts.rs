// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "http://localhost:8000";
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// Listing site the relative ad links resolve against
pub const LISTING_ORIGIN: &str = "https://www.polovniautomobili.com";

// Scrape defaults (server paginates the search itself)
pub const DEFAULT_START_PAGE: u32 = 1;
pub const DEFAULT_MAX_PAGES: u32 = 5;

// Query defaults
pub const DEFAULT_MIN_COUNT: u32 = 1;
