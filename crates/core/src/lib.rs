//! Domain logic for the newsreel video editor.
//!
//! This crate has no internal dependencies: it holds the data-model enums,
//! the editor view-state machine, the playback progress counter, the
//! article search filter and the pure view models rendered by the API.

pub mod article_search;
pub mod aspect_ratio;
pub mod editor;
pub mod error;
pub mod metadata;
pub mod playback;
pub mod presentation;
pub mod project_status;
pub mod slide;
pub mod slide_order;
pub mod template_dialog;
pub mod toolbar;
pub mod types;
