use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

use directory::remote::REMOTE_DIRECTORY_PATH;

pub struct Config {
    pub port: u16,
    pub directory_url: String,
    pub analytics_url: Option<String>,
    pub search_debounce_ms: u64,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("RUST_PORT", "7070"),
            directory_url: try_load("DIRECTORY_URL", REMOTE_DIRECTORY_PATH),
            analytics_url: var("ANALYTICS_URL").ok(),
            search_debounce_ms: try_load("SEARCH_DEBOUNCE_MS", "100"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
