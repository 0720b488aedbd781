use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version and the active store backend.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let store = if state.config.redis_url.is_some() {
        "redis"
    } else {
        "memory"
    };
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "prp-api",
        "store": store
    }))
}
