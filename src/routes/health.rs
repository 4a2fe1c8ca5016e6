use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let stats = state.index.stats();
    Json(json!({
        "status": "ok",
        "service": "unscrambler",
        "version": env!("CARGO_PKG_VERSION"),
        "words": state.index.word_count(),
        "signatures": state.index.signature_count(),
        "lines_read": stats.lines_read,
        "discarded": stats.discarded
    }))
}
