pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::lookup::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Page
        .route("/", get(handlers::handle_page))
        .route("/lookup", post(handlers::handle_submit))
        // JSON API
        .route("/api/v1/lookup", get(handlers::handle_lookup_state))
        .route("/api/v1/lookup/input", put(handlers::handle_set_input))
        .route("/api/v1/profile", get(handlers::handle_get_profile))
        .with_state(state)
}
