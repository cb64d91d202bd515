//! # Organization Search Service
//!
//! Backend for the organization search box on the site: visitors type a
//! name and get up to five matching organizations, each linking to its
//! detail page.
//!
//!
//!
//! # Data Flow
//! - The directory file is published from the maintained spreadsheet (see
//!   the `process` tool)
//! - On startup the server kicks off one fetch of that file; until it
//!   lands, `/search` answers with `loaded: false` and no results
//! - Filtering is a literal prefix/alias match over the in-memory list,
//!   synchronous per request
//! - Search strings go to analytics through a debouncer so a burst of
//!   keystrokes emits a single event
//!
//!
//!
//! # Endpoints
//! - `GET /search?q=acme` → `{ "loaded": true, "results": [...] }`
//! - `GET /` → status, or a permanent redirect for `?company=` deep links

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};
use tokio::{
    net::TcpListener,
    signal::{
        ctrl_c,
        unix::{SignalKind, signal},
    },
    time::sleep,
};
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod debounce;
pub mod error;
pub mod routes;
pub mod search;
pub mod session;
pub mod state;
pub mod tracking;

use directory::remote::get_directory_remote;
use routes::{root_handler, search_handler};
use state::AppState;

const FETCH_ATTEMPTS: u32 = 3;
const FETCH_RETRY_DELAY: Duration = Duration::from_secs(5);

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new();

    tokio::spawn(load_directory(state.clone()));

    info!("Starting server...");

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .route("/", get(root_handler))
        .route("/search", get(search_handler))
        .layer(cors)
        .with_state(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

/// One fetch per server lifetime. On failure the service keeps reporting
/// the loading state rather than serving an empty directory as loaded.
async fn load_directory(state: Arc<AppState>) {
    for attempt in 1..=FETCH_ATTEMPTS {
        let fetched = state
            .loader
            .get_or_fetch(|| async {
                let directory =
                    get_directory_remote(&state.client, &state.config.directory_url).await?;

                Ok(directory.organizations)
            })
            .await;

        match fetched {
            Ok(organizations) => {
                info!("Loaded {} organizations", organizations.len());
                return;
            }
            Err(e) => warn!("Directory fetch attempt {attempt} failed: {e}"),
        }

        sleep(FETCH_RETRY_DELAY).await;
    }

    error!("Giving up on the directory fetch, search stays in the loading state");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
