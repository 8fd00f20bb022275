//! Repository for the `articles` table.

use newsreel_core::types::DbId;
use sqlx::PgPool;

use crate::models::article::Article;

const COLUMNS: &str = "id, title, author, category, published_at, thumbnail_url, excerpt, \
                       content, keywords, created_at, updated_at";

/// Read-only access to articles.
pub struct ArticleRepo;

impl ArticleRepo {
    /// List all articles, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Article>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM articles ORDER BY published_at DESC NULLS LAST, created_at DESC"
        );
        sqlx::query_as::<_, Article>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE id = $1");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
