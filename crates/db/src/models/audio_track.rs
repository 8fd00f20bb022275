//! Audio track entity model.

use newsreel_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An audio track row from the `audio_tracks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AudioTrack {
    pub id: DbId,
    pub name: String,
    pub category: Option<String>,
    /// Seconds.
    pub duration: Option<i32>,
    pub url: String,
    pub is_premium: bool,
    pub created_at: Timestamp,
}
