//! Repository for the `video_projects` table.

use newsreel_core::project_status::{DEFAULT_FPS, PROJECT_STATUS_DRAFT};
use newsreel_core::types::DbId;
use sqlx::PgPool;

use crate::models::video_project::{CreateVideoProject, UpdateVideoProject, VideoProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, article_id, template_id, title, description, aspect_ratio, \
                       duration, fps, status, keywords, thumbnail_url, output_url, \
                       created_at, updated_at";

/// Provides CRUD operations for video projects.
pub struct VideoProjectRepo;

impl VideoProjectRepo {
    /// Insert a new project in `draft` status, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateVideoProject,
    ) -> Result<VideoProject, sqlx::Error> {
        let query = format!(
            "INSERT INTO video_projects
                (article_id, title, description, aspect_ratio, keywords, thumbnail_url, fps, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VideoProject>(&query)
            .bind(input.article_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.aspect_ratio.as_str())
            .bind(&input.keywords)
            .bind(&input.thumbnail_url)
            .bind(DEFAULT_FPS)
            .bind(PROJECT_STATUS_DRAFT)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<VideoProject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM video_projects WHERE id = $1");
        sqlx::query_as::<_, VideoProject>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<VideoProject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM video_projects ORDER BY created_at DESC");
        sqlx::query_as::<_, VideoProject>(&query).fetch_all(pool).await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVideoProject,
    ) -> Result<Option<VideoProject>, sqlx::Error> {
        let query = format!(
            "UPDATE video_projects SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                aspect_ratio = COALESCE($4, aspect_ratio),
                fps = COALESCE($5, fps),
                keywords = COALESCE($6, keywords),
                thumbnail_url = COALESCE($7, thumbnail_url)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VideoProject>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.aspect_ratio.map(|r| r.as_str()))
            .bind(input.fps)
            .bind(&input.keywords)
            .bind(&input.thumbnail_url)
            .fetch_optional(pool)
            .await
    }

    /// Record the template a project was generated with.
    pub async fn set_template(
        pool: &PgPool,
        id: DbId,
        template_id: DbId,
    ) -> Result<Option<VideoProject>, sqlx::Error> {
        let query = format!(
            "UPDATE video_projects SET template_id = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VideoProject>(&query)
            .bind(id)
            .bind(template_id)
            .fetch_optional(pool)
            .await
    }
}
