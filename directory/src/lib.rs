//! # Organization Directory
//!
//! Shared data model for the organization list backing the search box.
//!
//! ## Data flow
//! - The directory lives in a spreadsheet maintained by volunteers.
//! - The `process` tool pulls the sheet, cleans it up and writes
//!   `directory.json`, which gets published with the data repo.
//! - The server fetches that published file once per lifetime through
//!   [`Loader`], which memoizes the result for every later query.
//!
//! ## Schema
//! - `name` (**string**): display name
//! - `url` (**string**): canonical domain, also the detail-route key
//! - `searchTerms` (**string**): lowercase, comma-separated aliases, led by
//!   the organization name

use std::{fs, future::Future};

use anyhow::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;

pub mod remote;

const DIRECTORY_PATH: &str = "../directory.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub name: String,
    pub url: String,
    pub search_terms: String,
}

impl Organization {
    /// Route of the per-organization detail page, keyed by domain.
    pub fn detail_path(&self) -> String {
        format!("/d/{}/", self.url)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Directory {
    pub fetched_at: DateTime<Utc>,
    pub organizations: Vec<Organization>,
}

impl Directory {
    pub fn empty() -> Self {
        Self {
            fetched_at: Utc::now(),
            organizations: Vec::new(),
        }
    }
}

pub fn get_directory() -> Directory {
    let data = fs::read(DIRECTORY_PATH).unwrap();

    serde_json::from_slice(&data).unwrap()
}

pub fn try_get_directory() -> Option<Directory> {
    let data = fs::read(DIRECTORY_PATH).ok()?;

    serde_json::from_slice(&data).ok()
}

pub fn write_directory(directory: &Directory) {
    fs::write(DIRECTORY_PATH, serde_json::to_vec_pretty(directory).unwrap()).unwrap();
}

/// Loose syntactic check used before a value is treated as a domain.
pub fn is_plausible_domain(s: &str) -> bool {
    if s.is_empty() || s.len() > 253 || !s.contains('.') {
        return false;
    }

    !s.starts_with(['.', '-'])
        && !s.ends_with(['.', '-'])
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
}

/// Single-shot, memoized holder for the fetched organization list.
///
/// The first `get_or_fetch` issues the fetch; every later call observes the
/// cached list. A failed fetch caches nothing, so the loaded flag can only
/// ever transition to true with real data behind it.
#[derive(Debug, Default)]
pub struct Loader {
    cell: OnceCell<Vec<Organization>>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Non-blocking probe: `None` means still loading.
    pub fn get(&self) -> Option<&[Organization]> {
        self.cell.get().map(Vec::as_slice)
    }

    pub async fn get_or_fetch<F, Fut>(&self, fetch: F) -> Result<&[Organization], Error>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Organization>, Error>>,
    {
        let organizations = self.cell.get_or_try_init(fetch).await?;

        Ok(organizations.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn acme() -> Vec<Organization> {
        vec![Organization {
            name: "Acme".to_string(),
            url: "acme.com".to_string(),
            search_terms: "acme, acme corp".to_string(),
        }]
    }

    #[test]
    fn detail_path_is_keyed_by_domain() {
        assert_eq!(acme()[0].detail_path(), "/d/acme.com/");
    }

    #[test]
    fn parses_the_published_shape() {
        let json = r#"{
            "fetchedAt": "2026-01-12T00:00:00Z",
            "organizations": [
                { "name": "Acme", "url": "acme.com", "searchTerms": "acme, acme corp" }
            ]
        }"#;

        let directory: Directory = serde_json::from_str(json).unwrap();

        assert_eq!(directory.organizations, acme());
    }

    #[test]
    fn plausible_domains() {
        assert!(is_plausible_domain("acme.com"));
        assert!(is_plausible_domain("my-org.example.co.uk"));

        assert!(!is_plausible_domain(""));
        assert!(!is_plausible_domain("acme"));
        assert!(!is_plausible_domain(".acme.com"));
        assert!(!is_plausible_domain("acme.com-"));
        assert!(!is_plausible_domain("acme.com/path"));
        assert!(!is_plausible_domain("https://acme.com"));
    }

    #[tokio::test]
    async fn loader_fetches_exactly_once() {
        let loader = Loader::new();
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let organizations = loader
                .get_or_fetch(|| async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(acme())
                })
                .await
                .unwrap();

            assert_eq!(organizations.len(), 1);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_fetch_never_reports_loaded() {
        let loader = Loader::new();

        let fetched = loader
            .get_or_fetch(|| async { Err(anyhow::anyhow!("unreachable")) })
            .await;

        assert!(fetched.is_err());
        assert!(loader.get().is_none());

        loader.get_or_fetch(|| async { Ok(acme()) }).await.unwrap();

        assert!(loader.get().is_some());
    }
}
