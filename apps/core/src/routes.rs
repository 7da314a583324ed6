//! Route configuration for the CircuitChat API.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{self, AppState};

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Conversational endpoint
        .route("/chat", post(handlers::chat_handler))
        // Direct solver endpoints
        .route("/api/ohm", post(handlers::ohm_handler))
        .route("/api/resistors", post(handlers::resistors_handler))
        // Information endpoints
        .route("/api/info", get(handlers::info_handler))
        // Health check
        .route("/health", get(handlers::health_handler))
        .with_state(state)
}
