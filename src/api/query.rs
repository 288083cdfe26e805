// src/api/query.rs
//
// Builds the grouped-results URL from the current options and filter maps.
// Values pass through as-is; the backend owns validation of counts and URLs.

use std::error::Error;

use url::Url;

use crate::config::options::QueryOptions;
use super::types::MakeFilter;

/// Serialize options + filters into one absolute URL.
///
/// `group_by` is appended once per checked key. `search_url` is appended
/// once, only when non-empty. Filter maps become JSON text values and are
/// omitted entirely when `None`.
pub fn grouped_url(
    base: &Url,
    options: &QueryOptions,
    include: Option<&MakeFilter>,
    exclude: Option<&MakeFilter>,
) -> Result<Url, Box<dyn Error>> {
    let mut url = base.join("cars/grouped")?;

    {
        let mut q = url.query_pairs_mut();
        q.append_pair("min_count", &options.min_count.to_string());
        for key in options.group_by() {
            q.append_pair("group_by", key.param());
        }
        if !options.search_url.trim().is_empty() {
            q.append_pair("search_url", options.search_url.trim());
        }
        if let Some(inc) = include {
            q.append_pair("makes_to_include", &serde_json::to_string(inc)?);
        }
        if let Some(exc) = exclude {
            q.append_pair("makes_to_exclude", &serde_json::to_string(exc)?);
        }
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::SortKey;

    fn base() -> Url {
        Url::parse("http://localhost:8000").unwrap()
    }

    fn options() -> QueryOptions {
        QueryOptions {
            group_make: true,
            group_model: false,
            group_year: true,
            min_count: 3,
            search_url: s!(),
            default_sort: SortKey::Year,
        }
    }

    #[test]
    fn group_by_repeats_per_checked_key() {
        let url = grouped_url(&base(), &options(), None, None).unwrap();
        let q = url.query().unwrap();
        assert!(q.contains("min_count=3"));
        assert!(q.contains("group_by=make"));
        assert!(q.contains("group_by=year"));
        assert!(!q.contains("group_by=model"));
    }

    #[test]
    fn search_url_appended_once_and_only_when_set() {
        let mut opts = options();
        let url = grouped_url(&base(), &opts, None, None).unwrap();
        assert!(!url.query().unwrap().contains("search_url"));

        opts.search_url = s!("https://example.com/search?page=1");
        let url = grouped_url(&base(), &opts, None, None).unwrap();
        let hits = url
            .query_pairs()
            .filter(|(k, _)| k == "search_url")
            .count();
        assert_eq!(hits, 1);
    }

    #[test]
    fn filters_serialize_as_json_values() {
        let mut inc = MakeFilter::new();
        inc.insert(s!("Audi"), vec![s!("A4"), s!("A6")]);
        let url = grouped_url(&base(), &options(), Some(&inc), None).unwrap();

        let (_, v) = url
            .query_pairs()
            .find(|(k, _)| k == "makes_to_include")
            .expect("include param present");
        assert_eq!(v, r#"{"Audi":["A4","A6"]}"#);
        assert!(url.query_pairs().all(|(k, _)| k != "makes_to_exclude"));
    }
}
