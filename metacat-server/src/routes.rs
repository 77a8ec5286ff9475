//! Route wiring for the metadata service.

use crate::handlers::{self, AppState};
use axum::routing::{get, post};
use axum::Router;

/// Builds the service router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/metadata", post(handlers::persist_metadata))
        .route("/v1/metadata/", post(handlers::persist_metadata))
        .route("/v1/metadata/search", get(handlers::search_metadata))
        .with_state(state)
}
