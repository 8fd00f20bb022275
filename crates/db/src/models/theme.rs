//! Theme entity model.

use newsreel_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A theme row from the `themes` table. `colors` is an ordered JSON array
/// of hex strings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Theme {
    pub id: DbId,
    pub name: String,
    pub colors: serde_json::Value,
    pub fonts: serde_json::Value,
    pub is_default: bool,
    pub created_at: Timestamp,
}
