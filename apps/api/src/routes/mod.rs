pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::session::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/skills/extract", post(handlers::handle_extract_skills))
        // Analysis session
        .route("/api/v1/analyses", post(handlers::handle_submit))
        .route("/api/v1/analyses/current", get(handlers::handle_get_current))
        .route(
            "/api/v1/analyses/current/confidence",
            post(handlers::handle_toggle_confidence),
        )
        .route(
            "/api/v1/analyses/current/export",
            get(handlers::handle_export_current),
        )
        .route("/api/v1/analyses/history", get(handlers::handle_history))
        .route(
            "/api/v1/analyses/history/:id/open",
            post(handlers::handle_open_history),
        )
        .route(
            "/api/v1/analyses/history/:id",
            delete(handlers::handle_delete_history),
        )
        .route("/api/v1/ship-status", get(handlers::handle_ship_status))
        .with_state(state)
}
