//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` create / update DTOs where the table is writable

pub mod article;
pub mod audio_track;
pub mod render_job;
pub mod template;
pub mod theme;
pub mod video_project;
pub mod video_slide;
