use std::{sync::Arc, time::Duration};

use directory::Loader;
use reqwest::Client;

use crate::{config::Config, debounce::Debouncer, tracking::Tracker};

pub struct AppState {
    pub config: Config,
    pub client: Client,
    pub loader: Loader,
    pub tracker: Tracker,
    pub search_debounce: Debouncer,
}

impl AppState {
    pub fn new() -> Arc<Self> {
        let config = Config::load();
        let client = Client::new();

        let tracker = Tracker::new(client.clone(), config.analytics_url.clone());
        let search_debounce = Debouncer::new(Duration::from_millis(config.search_debounce_ms));

        Arc::new(Self {
            config,
            client,
            loader: Loader::new(),
            tracker,
            search_debounce,
        })
    }
}
