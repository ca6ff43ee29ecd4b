use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/holidays/", get(handlers::list_holidays))
        .route("/holidays/search/", get(handlers::search_holidays))
        .with_state(state)
}
