//! HTTP handlers, one module per resource.

pub mod articles;
pub mod catalog;
pub mod editor;
pub mod projects;
pub mod render_jobs;
pub mod slides;
