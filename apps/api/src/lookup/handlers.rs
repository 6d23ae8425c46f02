//! Axum route handlers for the lookup page and the lookup API.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, Redirect},
    Form, Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::lookup::{lookup_profile, LookupSnapshot};
use crate::profile::ProfileView;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LookupForm {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct InputUpdate {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    #[serde(default)]
    pub url: String,
}

/// GET /
///
/// Renders the page for the current lookup state.
pub async fn handle_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let snapshot = state.lookup.snapshot().await;
    let html = state.renderer.render(&snapshot)?;
    Ok(Html(html))
}

/// POST /lookup
///
/// Runs a lookup for the submitted URL, then sends the browser back to the page.
/// Failures are part of the lookup state, not of this response.
pub async fn handle_submit(
    State(state): State<AppState>,
    Form(form): Form<LookupForm>,
) -> Redirect {
    state.lookup.submit(&form.url).await;
    Redirect::to("/")
}

/// GET /api/v1/lookup
pub async fn handle_lookup_state(State(state): State<AppState>) -> Json<LookupSnapshot> {
    Json(state.lookup.snapshot().await)
}

/// PUT /api/v1/lookup/input
///
/// Edits the page's URL field without submitting it. Refused while loading.
pub async fn handle_set_input(
    State(state): State<AppState>,
    Json(update): Json<InputUpdate>,
) -> Result<StatusCode, AppError> {
    if !state.lookup.set_input(&update.url).await {
        return Err(AppError::Conflict(
            "a lookup is in progress; the URL cannot be edited".to_string(),
        ));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/profile?url=...
///
/// Stateless lookup: fetches and normalizes one profile without touching the
/// page state.
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Query(query): Query<ProfileQuery>,
) -> Result<Json<ProfileView>, AppError> {
    let view = lookup_profile(
        state.profile_source.as_ref(),
        &query.url,
        state.config.fetch_timeout,
    )
    .await?;
    Ok(Json(view))
}
