//! Video template entity model.

use newsreel_core::slide::slide_duration_from_settings;
use newsreel_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A template row from the `video_templates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Template {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub thumbnail_url: Option<String>,
    pub default_settings: serde_json::Value,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Template {
    /// Per-slide duration for slides drafted with this template.
    pub fn slide_duration_secs(&self) -> f64 {
        slide_duration_from_settings(&self.default_settings)
    }
}
