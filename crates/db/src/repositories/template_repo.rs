//! Repository for the `video_templates` table.

use newsreel_core::types::DbId;
use sqlx::PgPool;

use crate::models::template::Template;

const COLUMNS: &str = "id, name, description, category, thumbnail_url, default_settings, \
                       is_active, created_at, updated_at";

pub struct TemplateRepo;

impl TemplateRepo {
    /// List active templates in catalog order.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Template>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM video_templates WHERE is_active = true ORDER BY created_at, name"
        );
        sqlx::query_as::<_, Template>(&query).fetch_all(pool).await
    }

    /// Find a template by ID, active or not.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Template>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM video_templates WHERE id = $1");
        sqlx::query_as::<_, Template>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Template>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM video_templates WHERE name = $1");
        sqlx::query_as::<_, Template>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }
}
