//! Shared query parameter types for API handlers.

use newsreel_core::types::DbId;
use serde::Deserialize;

/// `?q=` free-text search.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// `?article=<id>` as carried by the editor link.
#[derive(Debug, Default, Deserialize)]
pub struct ArticleParam {
    pub article: Option<DbId>,
}
