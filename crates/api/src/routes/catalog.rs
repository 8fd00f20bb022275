//! Route definitions for the read-only catalogs.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Catalog routes, merged at the `/api/v1` root.
///
/// ```text
/// GET    /templates       -> list_templates
/// GET    /themes          -> list_themes
/// GET    /audio-tracks    -> list_audio_tracks
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/templates", get(catalog::list_templates))
        .route("/themes", get(catalog::list_themes))
        .route("/audio-tracks", get(catalog::list_audio_tracks))
}
