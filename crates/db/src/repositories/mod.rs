//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod article_repo;
pub mod audio_track_repo;
pub mod render_job_repo;
pub mod template_repo;
pub mod theme_repo;
pub mod video_project_repo;
pub mod video_slide_repo;

pub use article_repo::ArticleRepo;
pub use audio_track_repo::AudioTrackRepo;
pub use render_job_repo::RenderJobRepo;
pub use template_repo::TemplateRepo;
pub use theme_repo::ThemeRepo;
pub use video_project_repo::VideoProjectRepo;
pub use video_slide_repo::VideoSlideRepo;
