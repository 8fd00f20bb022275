//! Route definitions for the `/projects` resource.
//!
//! Also nests slide and render-job routes under `/projects/{id}/...`.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{projects, render_jobs, slides};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                              -> list
/// GET    /{id}                          -> get_by_id
/// PUT    /{id}                          -> update
///
/// GET    /{id}/slides                   -> list_by_project
/// POST   /{id}/slides                   -> create
/// POST   /{id}/slides/reorder           -> reorder
/// PUT    /{id}/slides/{slide_id}        -> update
/// DELETE /{id}/slides/{slide_id}        -> delete
///
/// GET    /{id}/render-jobs              -> list_by_project
/// POST   /{id}/render-jobs              -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list))
        .route("/{id}", get(projects::get_by_id).put(projects::update))
        .route(
            "/{id}/slides",
            get(slides::list_by_project).post(slides::create),
        )
        .route("/{id}/slides/reorder", post(slides::reorder))
        .route(
            "/{id}/slides/{slide_id}",
            put(slides::update).delete(slides::delete),
        )
        .route(
            "/{id}/render-jobs",
            get(render_jobs::list_by_project).post(render_jobs::create),
        )
}
