//! Repository for the `themes` table.

use sqlx::PgPool;

use crate::models::theme::Theme;

const COLUMNS: &str = "id, name, colors, fonts, is_default, created_at";

pub struct ThemeRepo;

impl ThemeRepo {
    /// List themes with the default theme first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Theme>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM themes ORDER BY is_default DESC, created_at, name");
        sqlx::query_as::<_, Theme>(&query).fetch_all(pool).await
    }
}
