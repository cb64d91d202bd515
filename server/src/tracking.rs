use std::future::Future;

use reqwest::Client;
use serde_json::json;
use tracing::debug;

/// Fire-and-forget analytics. Nothing here may block or fail the search
/// path; a missing endpoint disables tracking entirely.
#[derive(Debug, Clone)]
pub struct Tracker {
    client: Client,
    endpoint: Option<String>,
}

impl Tracker {
    pub fn new(client: Client, endpoint: Option<String>) -> Self {
        Self { client, endpoint }
    }

    /// Effect reporting a search string, meant to be scheduled through the
    /// debouncer rather than awaited inline.
    pub fn search_event(&self, query: &str) -> impl Future<Output = ()> + Send + use<> {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        let payload = json!({ "event": "search", "query": query });

        async move {
            let Some(endpoint) = endpoint else { return };

            if let Err(e) = client.post(&endpoint).json(&payload).send().await {
                debug!("Dropped search event: {e}");
            }
        }
    }

    /// Reports a selected organization right away.
    pub fn track_selection(&self, domain: &str) {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        let payload = json!({ "event": "select", "domain": domain });

        tokio::spawn(async move {
            let Some(endpoint) = endpoint else { return };

            if let Err(e) = client.post(&endpoint).json(&payload).send().await {
                debug!("Dropped selection event: {e}");
            }
        });
    }
}
