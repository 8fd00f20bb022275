//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::Json;
use newsreel_core::error::CoreError;
use newsreel_core::types::DbId;
use newsreel_db::models::video_project::{UpdateVideoProject, VideoProject};
use newsreel_db::repositories::VideoProjectRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Fetch a project or fail with 404.
pub(crate) async fn find_project(state: &AppState, id: DbId) -> AppResult<VideoProject> {
    let project = VideoProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "VideoProject",
            id,
        })?;
    Ok(project)
}

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<VideoProject>>>> {
    let projects = VideoProjectRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<VideoProject>>> {
    let project = find_project(&state, id).await?;
    Ok(Json(DataResponse { data: project }))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateVideoProject>,
) -> AppResult<Json<DataResponse<VideoProject>>> {
    if let Some(title) = &input.title {
        if title.trim().is_empty() {
            return Err(CoreError::Validation("title must not be empty".to_string()).into());
        }
    }
    if let Some(fps) = input.fps {
        if fps <= 0 {
            return Err(CoreError::Validation(format!("fps must be > 0, got {fps}")).into());
        }
    }

    let project = VideoProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "VideoProject",
            id,
        })?;
    Ok(Json(DataResponse { data: project }))
}
