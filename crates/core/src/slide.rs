//! Slide values used by the editor and the draft-slide builder.

use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

/// Duration given to a slide when neither the user nor the template sets one.
pub const DEFAULT_SLIDE_DURATION_SECS: f64 = 5.0;

/// Most slides a single generation drafts. The configured slide count is
/// kept as entered; drafting stops here.
pub const MAX_DRAFT_SLIDES: usize = 100;

/// Key in `video_templates.default_settings` holding the per-slide duration.
pub const SETTINGS_KEY_SLIDE_DURATION: &str = "slide_duration";

/// The editor's view of one persisted slide.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditorSlide {
    pub id: DbId,
    pub slide_order: i32,
    pub text_content: String,
    pub image_url: Option<String>,
    pub duration_secs: f64,
}

/// A slide that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftSlide {
    pub slide_order: i32,
    pub text_content: String,
    pub image_url: Option<String>,
    pub duration_secs: f64,
}

/// Article fields a draft slide list is built from.
#[derive(Debug, Clone, Copy)]
pub struct DraftSource<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub image_url: Option<&'a str>,
}

/// Validate a slide duration. Playback divides by it, so it must be a
/// positive finite number.
pub fn validate_slide_duration(duration_secs: f64) -> Result<(), CoreError> {
    if !duration_secs.is_finite() {
        return Err(CoreError::Validation(
            "slide duration must be a finite number".to_string(),
        ));
    }
    if duration_secs <= 0.0 {
        return Err(CoreError::Validation(format!(
            "slide duration must be > 0, got {duration_secs}"
        )));
    }
    Ok(())
}

/// Read the per-slide duration from a template's `default_settings`.
///
/// Falls back to [`DEFAULT_SLIDE_DURATION_SECS`] when the key is missing or
/// does not hold a valid duration.
pub fn slide_duration_from_settings(settings: &serde_json::Value) -> f64 {
    settings
        .get(SETTINGS_KEY_SLIDE_DURATION)
        .and_then(|v| v.as_f64())
        .filter(|d| validate_slide_duration(*d).is_ok())
        .unwrap_or(DEFAULT_SLIDE_DURATION_SECS)
}

/// Split article text into trimmed, non-empty sentences.
fn sentences(body: &str) -> Vec<&str> {
    body.split_inclusive(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| s.chars().any(char::is_alphanumeric))
        .collect()
}

/// Build `count` draft slides from an article, at most [`MAX_DRAFT_SLIDES`].
///
/// The first slide carries the article title; the following ones take the
/// article's sentences in order, cycling when the text runs out. Every slide
/// uses the article thumbnail as its image.
pub fn draft_slides(source: DraftSource<'_>, count: usize, duration_secs: f64) -> Vec<DraftSlide> {
    let body = sentences(source.body);
    (0..count.min(MAX_DRAFT_SLIDES))
        .map(|i| {
            let text = if i == 0 || body.is_empty() {
                source.title
            } else {
                body[(i - 1) % body.len()]
            };
            DraftSlide {
                slide_order: i as i32 + 1,
                text_content: text.to_string(),
                image_url: source.image_url.map(str::to_string),
                duration_secs,
            }
        })
        .collect()
}

/// Sum of all slide durations in seconds.
pub fn total_duration_secs(slides: &[EditorSlide]) -> f64 {
    slides.iter().map(|s| s.duration_secs).sum()
}
