// src/api/client.rs
//
// Blocking HTTP client for the aggregation backend. Runs on worker threads
// spawned by the GUI actions; never on the UI thread.

use std::error::Error;
use std::time::Duration;

use serde_json::json;
use url::Url;

use crate::config::consts::HTTP_TIMEOUT_SECS;
use crate::config::options::QueryOptions;

use super::query;
use super::types::{GroupedResult, MakeCatalog, MakeFilter};

pub struct ApiClient {
    base: Url,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    /// `base_url` is injected so tests can point at a mock server.
    pub fn new(base_url: &str) -> Result<Self, Box<dyn Error>> {
        // Trailing slash so Url::join keeps any base path segment
        let mut base = s!(base_url);
        if !base.ends_with('/') { base.push('/'); }

        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;

        Ok(Self { base: Url::parse(&base)?, http })
    }

    /// GET /cars/grouped with the serialized options and filter maps.
    pub fn fetch_grouped(
        &self,
        options: &QueryOptions,
        include: Option<&MakeFilter>,
        exclude: Option<&MakeFilter>,
    ) -> Result<Vec<GroupedResult>, Box<dyn Error>> {
        let url = query::grouped_url(&self.base, options, include, exclude)?;
        logd!("Net: GET {}", url);

        let resp = self.http.get(url.clone()).send()?;
        if !resp.status().is_success() {
            return Err(format!("HTTP error: {} {}", resp.status(), url).into());
        }
        Ok(resp.json::<Vec<GroupedResult>>()?)
    }

    /// GET /cars/makes → make → models catalog.
    pub fn fetch_makes(&self) -> Result<MakeCatalog, Box<dyn Error>> {
        let url = self.base.join("cars/makes")?;
        logd!("Net: GET {}", url);

        let resp = self.http.get(url.clone()).send()?;
        if !resp.status().is_success() {
            return Err(format!("HTTP error: {} {}", resp.status(), url).into());
        }
        Ok(resp.json::<MakeCatalog>()?)
    }

    /// POST /ads: asks the server to scrape `search_url`. The response body
    /// is a human-readable tally; only the status matters here.
    pub fn trigger_scrape(
        &self,
        search_url: &str,
        start_page: u32,
        max_pages: u32,
    ) -> Result<(), Box<dyn Error>> {
        let url = self.base.join("ads")?;
        logd!("Net: POST {} pages={}..{}", url, start_page, max_pages);

        let body = json!({
            "search_url": search_url,
            "start_page": start_page,
            "max_pages": max_pages,
        });

        let resp = self.http.post(url.clone()).json(&body).send()?;
        if !resp.status().is_success() {
            return Err(format!("HTTP error: {} {}", resp.status(), url).into());
        }
        Ok(())
    }

    /// Scrape, then fetch the refreshed grouped results.
    /// The GET is never issued unless the POST came back 2xx.
    pub fn scrape_then_fetch(
        &self,
        options: &QueryOptions,
        scrape: &crate::config::options::ScrapeOptions,
        include: Option<&MakeFilter>,
        exclude: Option<&MakeFilter>,
    ) -> Result<Vec<GroupedResult>, Box<dyn Error>> {
        self.trigger_scrape(&options.search_url, scrape.start_page, scrape.max_pages)?;
        self.fetch_grouped(options, include, exclude)
    }
}
