pub mod health;
pub mod page;
pub mod solve;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::AppState;

pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(page::home_page))
        .route("/favicon.ico", get(page::favicon))
        .route("/health", get(health::health_check))
        .nest("/api", api_routes())
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new().route("/solve", get(solve::solve))
}
