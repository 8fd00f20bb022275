//! Lifecycle labels written to `video_projects.status` and `render_jobs.status`.
//!
//! Both columns are free text. This layer only ever writes the initial
//! value; nothing here drives a transition.

/// Status written when a project is created from a completed metadata form.
pub const PROJECT_STATUS_DRAFT: &str = "draft";

/// Status written when the user requests an export.
pub const RENDER_STATUS_QUEUED: &str = "queued";

/// Default frames per second for a new project (video settings panel default).
pub const DEFAULT_FPS: i32 = 30;
