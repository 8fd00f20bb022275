//! Read-only catalogs: templates, themes and audio tracks.

use axum::extract::State;
use axum::Json;
use newsreel_db::models::audio_track::AudioTrack;
use newsreel_db::models::template::Template;
use newsreel_db::models::theme::Theme;
use newsreel_db::repositories::{AudioTrackRepo, TemplateRepo, ThemeRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/templates
pub async fn list_templates(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Template>>>> {
    let templates = TemplateRepo::list_active(&state.pool).await?;
    Ok(Json(DataResponse { data: templates }))
}

/// GET /api/v1/themes
pub async fn list_themes(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Theme>>>> {
    let themes = ThemeRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: themes }))
}

/// GET /api/v1/audio-tracks
pub async fn list_audio_tracks(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<AudioTrack>>>> {
    let tracks = AudioTrackRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: tracks }))
}
