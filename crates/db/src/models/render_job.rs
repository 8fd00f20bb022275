//! Render job entity model.
//!
//! Rows are only ever created in the `queued` state here; whatever renders
//! the video owns the later transitions.

use newsreel_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A render job row from the `render_jobs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RenderJob {
    pub id: DbId,
    pub project_id: DbId,
    pub status: String,
    pub progress: i32,
    pub error_message: Option<String>,
    pub started_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
}
