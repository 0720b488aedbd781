use std::sync::Arc;

use crate::config::Config;
use crate::session::SessionController;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Owns the current-analysis slot and the history list behind the key-value port.
    pub session: Arc<SessionController>,
}
