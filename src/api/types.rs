// src/api/types.rs
//
// Wire types for the aggregation backend. Deserialize-only: the client
// never writes these back, it just re-orders them for display.

use std::collections::BTreeMap;

use serde::Deserialize;

/// One scraped listing. The backend stores many more fields (mileage,
/// transmission, color, ...); we only bind what the results view renders
/// and let serde drop the rest.
#[derive(Clone, Debug, Deserialize)]
pub struct Car {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price: i64,
    pub engine_capacity: i64,
    #[serde(default)]
    pub img_src: Option<String>,
    /// Relative to the listing site origin
    pub link: String,
}

/// A cluster of listings sharing the grouped keys. The backend projects
/// only the keys that were grouped by, so each is optional here.
#[derive(Clone, Debug, Deserialize)]
pub struct GroupedResult {
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    pub count: usize,
    pub cars: Vec<Car>,
}

/// Make → models reference mapping, fetched once per session.
/// BTreeMap keeps the make selector alphabetical; model order is the server's.
pub type MakeCatalog = BTreeMap<String, Vec<String>>;

/// Include/exclude filter parameter: make → selected models.
pub type MakeFilter = BTreeMap<String, Vec<String>>;
