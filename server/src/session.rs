//! One visitor's search box: the query, the visible results and the
//! debounced analytics side channel.
//!
//! Results are recomputed synchronously on every input event, so the most
//! recent input always wins. While the directory is still loading the
//! session reports [`SearchStatus::Loading`] instead of pretending the
//! query had zero matches.

use std::{sync::Arc, time::Duration};

use directory::{Loader, Organization};

use crate::{debounce::Debouncer, search::filter_organizations, tracking::Tracker};

pub struct SearchSession {
    loader: Arc<Loader>,
    tracker: Tracker,
    debouncer: Debouncer,
    query: String,
    results: Vec<Organization>,
}

pub enum SearchStatus<'a> {
    /// Directory not loaded yet; distinct from a query with no matches.
    Loading,
    Ready(&'a [Organization]),
}

impl SearchSession {
    pub fn new(loader: Arc<Loader>, tracker: Tracker, debounce: Duration) -> Self {
        Self {
            loader,
            tracker,
            debouncer: Debouncer::new(debounce),
            query: String::new(),
            results: Vec::new(),
        }
    }

    /// Handle one input event: recompute the results, then schedule the
    /// debounced analytics notification with the latest query.
    pub fn input(&mut self, text: &str) {
        self.query = text.to_string();

        self.results = match self.loader.get() {
            None => Vec::new(),
            Some(organizations) => filter_organizations(organizations, &self.query)
                .into_iter()
                .cloned()
                .collect(),
        };

        self.debouncer.call(self.tracker.search_event(&self.query));
    }

    pub fn status(&self) -> SearchStatus<'_> {
        if self.loader.get().is_none() {
            return SearchStatus::Loading;
        }

        SearchStatus::Ready(&self.results)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Report the selection and hand back the detail route to navigate to.
    pub fn select(&self, index: usize) -> Option<String> {
        let organization = self.results.get(index)?;

        self.tracker.track_selection(&organization.url);

        Some(organization.detail_path())
    }

    /// Clears the box, as when the search form regains focus.
    pub fn reset(&mut self) {
        self.query.clear();
        self.results.clear();
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Client;

    use super::*;

    fn sample() -> Vec<Organization> {
        vec![
            Organization {
                name: "Acme".to_string(),
                url: "acme.com".to_string(),
                search_terms: "acme, acme corp".to_string(),
            },
            Organization {
                name: "Facebook".to_string(),
                url: "facebook.com".to_string(),
                search_terms: "facebook, fb".to_string(),
            },
        ]
    }

    fn session(loader: Arc<Loader>) -> SearchSession {
        let tracker = Tracker::new(Client::new(), None);

        SearchSession::new(loader, tracker, Duration::from_millis(100))
    }

    #[tokio::test]
    async fn loading_is_distinct_from_no_matches() {
        let loader = Arc::new(Loader::new());
        let mut session = session(loader.clone());

        session.input("acme");
        assert!(matches!(session.status(), SearchStatus::Loading));

        loader.get_or_fetch(|| async { Ok(sample()) }).await.unwrap();

        session.input("acme");
        match session.status() {
            SearchStatus::Ready(results) => assert_eq!(results.len(), 1),
            SearchStatus::Loading => panic!("directory is loaded"),
        }

        session.input("xyz");
        match session.status() {
            SearchStatus::Ready(results) => assert!(results.is_empty()),
            SearchStatus::Loading => panic!("directory is loaded"),
        }
    }

    #[tokio::test]
    async fn selection_returns_the_detail_route() {
        let loader = Arc::new(Loader::new());
        loader.get_or_fetch(|| async { Ok(sample()) }).await.unwrap();

        let mut session = session(loader);
        session.input("fb");

        assert_eq!(session.select(0), Some("/d/facebook.com/".to_string()));
        assert_eq!(session.select(1), None);
    }

    #[tokio::test]
    async fn reset_clears_query_and_results() {
        let loader = Arc::new(Loader::new());
        loader.get_or_fetch(|| async { Ok(sample()) }).await.unwrap();

        let mut session = session(loader);
        session.input("acme");
        session.reset();

        assert_eq!(session.query(), "");
        match session.status() {
            SearchStatus::Ready(results) => assert!(results.is_empty()),
            SearchStatus::Loading => panic!("directory is loaded"),
        }
    }
}
