//! Route definitions for `/editor/sessions`.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::editor;
use crate::state::AppState;

/// Routes mounted at `/editor/sessions`.
///
/// ```text
/// POST   /                              -> open (?article=)
/// GET    /{id}                          -> get_view
/// DELETE /{id}                          -> close
/// PUT    /{id}/metadata                 -> update_metadata
/// POST   /{id}/metadata/confirm         -> confirm_metadata
/// PUT    /{id}/template                 -> select_template
/// POST   /{id}/template/confirm         -> confirm_template
/// POST   /{id}/template/cancel          -> cancel_template
/// PUT    /{id}/selection                -> select_slide
/// POST   /{id}/playback/toggle          -> toggle_playback
/// PUT    /{id}/toolbar                  -> update_toolbar
/// DELETE /{id}/slides/{index}           -> delete_slide
/// GET    /{id}/progress/stream          -> progress_stream
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(editor::open))
        .route("/{id}", get(editor::get_view).delete(editor::close))
        .route("/{id}/metadata", put(editor::update_metadata))
        .route("/{id}/metadata/confirm", post(editor::confirm_metadata))
        .route("/{id}/template", put(editor::select_template))
        .route("/{id}/template/confirm", post(editor::confirm_template))
        .route("/{id}/template/cancel", post(editor::cancel_template))
        .route("/{id}/selection", put(editor::select_slide))
        .route("/{id}/playback/toggle", post(editor::toggle_playback))
        .route("/{id}/toolbar", put(editor::update_toolbar))
        .route("/{id}/slides/{index}", delete(editor::delete_slide))
        .route("/{id}/progress/stream", get(editor::progress_stream))
}
