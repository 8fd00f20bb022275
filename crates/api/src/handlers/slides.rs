//! Handlers for `/projects/{id}/slides`.
//!
//! Every successful write refreshes the slide list of any open editor
//! session on the project.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use newsreel_core::error::CoreError;
use newsreel_core::slide::validate_slide_duration;
use newsreel_core::slide_order::reorder_plan;
use newsreel_core::types::DbId;
use newsreel_db::models::video_slide::{
    CreateVideoSlide, MoveVideoSlide, UpdateVideoSlide, VideoSlide,
};
use newsreel_db::repositories::VideoSlideRepo;

use super::projects::find_project;
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

fn slide_not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: "VideoSlide",
        id,
    }
}

/// Push the project's stored slides to its editor sessions. The write has
/// already been committed, so a failure here is only logged.
async fn refresh_sessions(state: &AppState, project_id: DbId) {
    if let Err(e) = state.sessions.sync_project_slides(&state.pool, project_id).await {
        tracing::warn!(%project_id, error = %e, "Failed to refresh editor sessions");
    }
}

/// GET /api/v1/projects/{id}/slides
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<VideoSlide>>>> {
    find_project(&state, project_id).await?;
    let slides = VideoSlideRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(DataResponse { data: slides }))
}

/// POST /api/v1/projects/{id}/slides
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateVideoSlide>,
) -> AppResult<(StatusCode, Json<DataResponse<VideoSlide>>)> {
    if let Some(duration) = input.duration {
        validate_slide_duration(duration)?;
    }
    let slide = VideoSlideRepo::append(&state.pool, project_id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "VideoProject",
            id: project_id,
        })?;
    refresh_sessions(&state, project_id).await;
    Ok((StatusCode::CREATED, Json(DataResponse { data: slide })))
}

/// PUT /api/v1/projects/{id}/slides/{slide_id}
pub async fn update(
    State(state): State<AppState>,
    Path((project_id, slide_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateVideoSlide>,
) -> AppResult<Json<DataResponse<VideoSlide>>> {
    if let Some(duration) = input.duration {
        validate_slide_duration(duration)?;
    }
    let slide = VideoSlideRepo::update(&state.pool, project_id, slide_id, &input)
        .await?
        .ok_or_else(|| slide_not_found(slide_id))?;
    refresh_sessions(&state, project_id).await;
    Ok(Json(DataResponse { data: slide }))
}

/// DELETE /api/v1/projects/{id}/slides/{slide_id}
///
/// Remaining slides are renumbered to stay contiguous.
pub async fn delete(
    State(state): State<AppState>,
    Path((project_id, slide_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if VideoSlideRepo::delete_and_compact(&state.pool, project_id, slide_id).await? {
        refresh_sessions(&state, project_id).await;
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(slide_not_found(slide_id).into())
    }
}

/// POST /api/v1/projects/{id}/slides/reorder
pub async fn reorder(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<MoveVideoSlide>,
) -> AppResult<Json<DataResponse<Vec<VideoSlide>>>> {
    find_project(&state, project_id).await?;
    let count = VideoSlideRepo::count_by_project(&state.pool, project_id).await?;
    reorder_plan(input.from, input.to, count as usize)?;

    let slides = VideoSlideRepo::move_slide(&state.pool, project_id, input.from, input.to)
        .await?
        .ok_or_else(|| {
            CoreError::Conflict("Slides changed while reordering; reload and retry".to_string())
        })?;
    refresh_sessions(&state, project_id).await;
    Ok(Json(DataResponse { data: slides }))
}
