//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, tracing), and creates
//! the axum router ready for serving.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/shows", get(handlers::list_shows))
        .route("/shows", post(handlers::create_show))
        .route("/shows/{id}", get(handlers::get_show))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{InMemoryRepository, ShowRepository};
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let repo = Arc::new(InMemoryRepository::new()) as Arc<dyn ShowRepository>;
        let state = AppState::new(repo);
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
