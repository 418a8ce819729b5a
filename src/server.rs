//! HTTP suggestion endpoint.
//!
//! - `GET /` serves a static landing page.
//! - `GET /query/{word}` returns a JSON array of every word starting with `word`.

use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{Path, State},
    response::Html,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::{debug, info};

use crate::trie::Trie;

/// Queries shorter than this return no suggestions without touching the trie.
pub const MIN_QUERY_LEN: usize = 3;

const INDEX_HTML: &str = include_str!("index.html");

/// Shared state handed to every handler. The trie is frozen once it is
/// wrapped here; handlers only ever get `&Trie`.
#[derive(Debug, Clone)]
pub struct AppState {
    pub trie: Arc<Trie>,
}

impl AppState {
    pub fn new(trie: Trie) -> Self {
        Self {
            trie: Arc::new(trie),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct QueryPath {
    word: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/query/{word}", get(query))
        .with_state(state)
}

/// Serves `router` on `addr` until the process is stopped.
pub async fn serve(addr: SocketAddr, trie: Trie) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, router(AppState::new(trie))).await?;
    Ok(())
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn query(
    State(state): State<AppState>,
    Path(QueryPath { word }): Path<QueryPath>,
) -> Json<Vec<String>> {
    if word.chars().count() < MIN_QUERY_LEN {
        debug!("Query {:?} too short, returning no suggestions", word);
        return Json(Vec::new());
    }

    let suggestions = state.trie.search_prefix(&word);
    debug!("Query {:?} matched {} words", word, suggestions.len());
    Json(suggestions)
}
