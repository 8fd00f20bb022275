//! Handlers for `/projects/{id}/render-jobs`.
//!
//! Export only records the request; nothing in this service renders.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use newsreel_core::types::DbId;
use newsreel_db::models::render_job::RenderJob;
use newsreel_db::repositories::RenderJobRepo;

use super::projects::find_project;
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/projects/{id}/render-jobs
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<(StatusCode, Json<DataResponse<RenderJob>>)> {
    find_project(&state, project_id).await?;
    let job = RenderJobRepo::create_queued(&state.pool, project_id).await?;
    tracing::info!(%project_id, job_id = %job.id, "Render job queued");
    Ok((StatusCode::CREATED, Json(DataResponse { data: job })))
}

/// GET /api/v1/projects/{id}/render-jobs
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<RenderJob>>>> {
    find_project(&state, project_id).await?;
    let jobs = RenderJobRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(DataResponse { data: jobs }))
}
