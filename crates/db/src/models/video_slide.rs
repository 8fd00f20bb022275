//! Video slide entity model and DTOs.

use newsreel_core::slide::EditorSlide;
use newsreel_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A slide row from the `video_slides` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VideoSlide {
    pub id: DbId,
    pub project_id: DbId,
    /// 1-based position, contiguous within the project.
    pub slide_order: i32,
    pub text_content: String,
    pub image_url: Option<String>,
    /// Seconds.
    pub duration: f64,
    pub animation_effect: Option<String>,
    pub transition_type: Option<String>,
    pub background_color: Option<String>,
    pub text_style: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&VideoSlide> for EditorSlide {
    fn from(slide: &VideoSlide) -> Self {
        Self {
            id: slide.id,
            slide_order: slide.slide_order,
            text_content: slide.text_content.clone(),
            image_url: slide.image_url.clone(),
            duration_secs: slide.duration,
        }
    }
}

/// DTO for appending a slide. The order is assigned by the repository.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVideoSlide {
    #[serde(default)]
    pub text_content: String,
    pub image_url: Option<String>,
    /// Defaults to 5 seconds if omitted.
    pub duration: Option<f64>,
    pub animation_effect: Option<String>,
    pub transition_type: Option<String>,
    pub background_color: Option<String>,
    pub text_style: Option<serde_json::Value>,
}

/// DTO for editing a slide. Order changes go through [`MoveVideoSlide`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateVideoSlide {
    pub text_content: Option<String>,
    pub image_url: Option<String>,
    pub duration: Option<f64>,
    pub animation_effect: Option<String>,
    pub transition_type: Option<String>,
    pub background_color: Option<String>,
    pub text_style: Option<serde_json::Value>,
}

/// DTO for moving the slide at order `from` to order `to`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MoveVideoSlide {
    pub from: i32,
    pub to: i32,
}
