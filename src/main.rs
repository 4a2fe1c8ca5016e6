mod anagram;
mod config;
mod dictionary;
mod routes;
mod websocket;

use std::sync::Arc;

use anagram::AnagramIndex;
use anyhow::{Context, Result};
use axum::{routing::get, Router};
use config::Config;
use dictionary::DictionarySource;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Application state shared across all handlers
pub struct AppState {
    pub config: Config,
    /// Built before the server starts and never modified afterwards
    pub index: AnagramIndex,
}

impl AppState {
    pub fn new(config: Config, index: AnagramIndex) -> Self {
        let index = index.with_max_query_len(config.dictionary.max_query_length);
        Self { config, index }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "unscrambler=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Unscrambler server...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let http_client = reqwest::Client::builder()
        .timeout(config.fetch_timeout())
        .build()?;

    // Load dictionary; there is nothing to serve without one
    let source = DictionarySource::parse(&config.dictionary.source)?;
    let index = match anagram::initialize(&source, &http_client).await {
        Ok(index) => index,
        Err(e) => {
            tracing::error!("Failed to load dictionary: {}", e);
            return Err(e).context("cannot start without a dictionary");
        }
    };
    if index.is_empty() {
        tracing::warn!("Dictionary {} contains no usable words", source);
    }

    let state = Arc::new(AppState::new(config.clone(), index));

    // Start server
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("WebSocket endpoint: ws://{}/puzzle", addr);
    tracing::info!("Health check: http://{}/health", addr);

    axum::serve(listener, app(state)).await?;

    Ok(())
}

fn app(state: Arc<AppState>) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // WebSocket endpoint
        .route("/puzzle", get(websocket::handle_websocket))
        .merge(routes::create_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
