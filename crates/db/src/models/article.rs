//! Article entity model. Articles are read-only to the editor.

use newsreel_core::article_search::Searchable;
use newsreel_core::slide::DraftSource;
use newsreel_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An article row from the `articles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Article {
    pub id: DbId,
    pub title: String,
    pub author: Option<String>,
    pub category: Option<String>,
    pub published_at: Option<Timestamp>,
    pub thumbnail_url: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub keywords: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Searchable for Article {
    fn title(&self) -> &str {
        &self.title
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }
}

impl Article {
    /// Text used to seed draft slides: the full content when present,
    /// otherwise the excerpt.
    pub fn draft_source(&self) -> DraftSource<'_> {
        let body = self
            .content
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .or(self.excerpt.as_deref())
            .unwrap_or_default();
        DraftSource {
            title: &self.title,
            body,
            image_url: self.thumbnail_url.as_deref(),
        }
    }
}
