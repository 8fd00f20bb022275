pub mod articles;
pub mod catalog;
pub mod editor;
pub mod health;
pub mod projects;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /articles                                        filtered list (?q=)
/// /articles/{id}                                   one article + editor link
///
/// /templates                                       active template catalog
/// /themes                                          theme catalog
/// /audio-tracks                                    audio catalog
///
/// /projects                                        list
/// /projects/{id}                                   get, update
/// /projects/{id}/slides                            list, append
/// /projects/{id}/slides/reorder                    move (POST)
/// /projects/{id}/slides/{slide_id}                 edit, delete
/// /projects/{id}/render-jobs                       list, enqueue export
///
/// /editor/sessions                                 open (POST, ?article=)
/// /editor/sessions/{id}                            view, close
/// /editor/sessions/{id}/metadata                   edit form (PUT)
/// /editor/sessions/{id}/metadata/confirm           create project (POST)
/// /editor/sessions/{id}/template                   select (PUT)
/// /editor/sessions/{id}/template/confirm           start generation (POST)
/// /editor/sessions/{id}/template/cancel            clear selection (POST)
/// /editor/sessions/{id}/selection                  select slide (PUT)
/// /editor/sessions/{id}/playback/toggle            play / pause (POST)
/// /editor/sessions/{id}/toolbar                    panel toggle + settings (PUT)
/// /editor/sessions/{id}/slides/{index}             delete from timeline
/// /editor/sessions/{id}/progress/stream            progress SSE
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/articles", articles::router())
        .merge(catalog::router())
        .nest("/projects", projects::router())
        .nest("/editor/sessions", editor::router())
}
