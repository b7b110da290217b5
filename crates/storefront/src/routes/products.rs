//! Product grid route handlers.

use axum::extract::{Path, Query, State};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use super::{EffectResponse, parse_category, run_event};
use crate::error::Result;
use crate::services::UiEvent;
use crate::state::AppState;

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Grid of products whose name contains `q` (HTMX).
///
/// An empty or missing `q` returns the whole catalog.
#[instrument(skip(state, session))]
pub async fn search(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<SearchQuery>,
) -> Result<EffectResponse> {
    run_event(&state, &session, UiEvent::Search { query: query.q }).await
}

/// Grid of one category's products (HTMX).
///
/// Also asks the browser to scroll the product section into view.
#[instrument(skip(state, session))]
pub async fn category(
    State(state): State<AppState>,
    session: Session,
    Path(key): Path<String>,
) -> Result<EffectResponse> {
    let category = parse_category(&key)?;
    run_event(&state, &session, UiEvent::SelectCategory(category)).await
}
