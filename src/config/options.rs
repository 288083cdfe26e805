// src/config/options.rs
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub query: QueryOptions,
    pub scrape: ScrapeOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            query: QueryOptions::default(),
            scrape: ScrapeOptions::default(),
        }
    }
}

/// Fields the grouped endpoint can cluster on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroupKey {
    Make,
    Model,
    Year,
}

impl GroupKey {
    pub fn param(&self) -> &'static str {
        match self {
            GroupKey::Make => "make",
            GroupKey::Model => "model",
            GroupKey::Year => "year",
        }
    }
}

/// Sort key for the car list inside one group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Year,
    Price,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self { SortKey::Year => "Year", SortKey::Price => "Price" }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryOptions {
    pub group_make: bool,
    pub group_model: bool,
    pub group_year: bool,
    pub min_count: u32,
    /// Shared with the scrape trigger; appended to the query when non-empty.
    pub search_url: String,
    /// Initial sort for every freshly rendered group.
    pub default_sort: SortKey,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            group_make: true,
            group_model: true,
            group_year: false,
            min_count: DEFAULT_MIN_COUNT,
            search_url: s!(),
            default_sort: SortKey::Year,
        }
    }
}

impl QueryOptions {
    /// Checked keys in the order the backend documents them.
    pub fn group_by(&self) -> Vec<GroupKey> {
        let mut keys = Vec::new();
        if self.group_make { keys.push(GroupKey::Make); }
        if self.group_model { keys.push(GroupKey::Model); }
        if self.group_year { keys.push(GroupKey::Year); }
        keys
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub start_page: u32,
    pub max_pages: u32,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            start_page: DEFAULT_START_PAGE,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}
