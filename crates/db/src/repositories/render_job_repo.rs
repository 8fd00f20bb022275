//! Repository for the `render_jobs` table.

use newsreel_core::project_status::RENDER_STATUS_QUEUED;
use newsreel_core::types::DbId;
use sqlx::PgPool;

use crate::models::render_job::RenderJob;

const COLUMNS: &str =
    "id, project_id, status, progress, error_message, started_at, completed_at, created_at";

pub struct RenderJobRepo;

impl RenderJobRepo {
    /// Enqueue an export of `project_id` with status `queued` and progress 0.
    pub async fn create_queued(pool: &PgPool, project_id: DbId) -> Result<RenderJob, sqlx::Error> {
        let query = format!(
            "INSERT INTO render_jobs (project_id, status, progress)
             VALUES ($1, $2, 0)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RenderJob>(&query)
            .bind(project_id)
            .bind(RENDER_STATUS_QUEUED)
            .fetch_one(pool)
            .await
    }

    /// List a project's render jobs, most recent first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<RenderJob>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM render_jobs WHERE project_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, RenderJob>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
