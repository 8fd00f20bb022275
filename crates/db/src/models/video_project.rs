//! Video project entity model and DTOs.

use newsreel_core::aspect_ratio::AspectRatio;
use newsreel_core::metadata::VideoConfiguration;
use newsreel_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `video_projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VideoProject {
    pub id: DbId,
    pub user_id: Option<DbId>,
    pub article_id: Option<DbId>,
    pub template_id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
    /// One of `16:9`, `9:16`, `1:1`; guarded by a CHECK constraint.
    pub aspect_ratio: String,
    pub duration: Option<i32>,
    pub fps: i32,
    pub status: String,
    pub keywords: Vec<String>,
    pub thumbnail_url: Option<String>,
    pub output_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVideoProject {
    pub article_id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
    pub aspect_ratio: AspectRatio,
    pub keywords: Vec<String>,
    pub thumbnail_url: Option<String>,
}

impl CreateVideoProject {
    /// Build the insert DTO from a confirmed metadata form.
    pub fn from_configuration(
        article_id: Option<DbId>,
        thumbnail_url: Option<String>,
        config: &VideoConfiguration,
    ) -> Self {
        Self {
            article_id,
            title: config.title.clone(),
            description: config.description.clone(),
            aspect_ratio: config.aspect_ratio,
            keywords: config.keywords.clone(),
            thumbnail_url,
        }
    }
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateVideoProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub aspect_ratio: Option<AspectRatio>,
    pub fps: Option<i32>,
    pub keywords: Option<Vec<String>>,
    pub thumbnail_url: Option<String>,
}
