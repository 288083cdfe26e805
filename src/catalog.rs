// src/catalog.rs
//
// Session cache for the make → model catalog.
//
// The catalog backs the filter selectors and is fetched at most once per
// session. Filter-add clicks that arrive before the fetch lands are queued
// by the caller and replayed when the cache goes Ready; while a fetch is
// Pending no second request is started. A failed fetch returns the cache to
// Empty so the next click retries.

use crate::api::MakeCatalog;

#[derive(Debug)]
pub enum CatalogCache {
    Empty,
    Pending,
    Ready(MakeCatalog),
    Failed(String),
}

impl Default for CatalogCache {
    fn default() -> Self { CatalogCache::Empty }
}

impl CatalogCache {
    /// Ask for the catalog. Returns true iff the caller should start a
    /// fetch; Pending/Ready callers must not issue another request.
    pub fn request(&mut self) -> bool {
        match self {
            CatalogCache::Empty | CatalogCache::Failed(_) => {
                *self = CatalogCache::Pending;
                true
            }
            CatalogCache::Pending | CatalogCache::Ready(_) => false,
        }
    }

    /// Worker delivers the fetch outcome.
    pub fn complete(&mut self, result: Result<MakeCatalog, String>) {
        *self = match result {
            Ok(catalog) => CatalogCache::Ready(catalog),
            Err(msg) => CatalogCache::Failed(msg),
        };
    }

    pub fn get(&self) -> Option<&MakeCatalog> {
        match self {
            CatalogCache::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, CatalogCache::Pending)
    }

    /// One-shot read of a failure; resets to Empty so a later request
    /// starts a fresh fetch.
    pub fn take_failure(&mut self) -> Option<String> {
        if let CatalogCache::Failed(msg) = self {
            let msg = std::mem::take(msg);
            *self = CatalogCache::Empty;
            Some(msg)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> MakeCatalog {
        let mut c = MakeCatalog::new();
        c.insert(s!("Audi"), vec![s!("A4")]);
        c
    }

    #[test]
    fn only_first_request_starts_a_fetch() {
        let mut cache = CatalogCache::default();
        assert!(cache.request());
        assert!(cache.is_pending());
        assert!(!cache.request()); // queued by caller, no second fetch
        cache.complete(Ok(catalog()));
        assert!(!cache.request()); // already Ready
        assert!(cache.get().is_some());
    }

    #[test]
    fn failure_resets_and_allows_retry() {
        let mut cache = CatalogCache::default();
        assert!(cache.request());
        cache.complete(Err(s!("connection refused")));
        assert_eq!(cache.take_failure().as_deref(), Some("connection refused"));
        assert!(cache.get().is_none());
        assert!(cache.request()); // retry starts a new fetch
    }
}
