use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{anagram::sanitize_query, AppState};

#[derive(Debug, Deserialize)]
pub struct SolveParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SolveResponse {
    /// The query as it was looked up
    pub query: String,
    pub words: Vec<String>,
}

/// Look up every dictionary word made of exactly the letters of `q`
pub async fn solve(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SolveParams>,
) -> Json<SolveResponse> {
    let query = sanitize_query(&params.q, state.index.max_query_len());
    let words = state.index.solve(&query);
    tracing::debug!("Query '{}' matched {} words", query, words.len());

    Json(SolveResponse { query, words })
}
