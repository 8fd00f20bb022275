use std::sync::Arc;

use crate::config::ServerConfig;
use crate::editor::SessionManager;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: newsreel_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Live editor sessions and their timers.
    pub sessions: Arc<SessionManager>,
}
