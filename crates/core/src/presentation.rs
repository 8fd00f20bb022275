//! Pure view models for the editor surface.
//!
//! Each function renders part of the editor from state it is handed; none of
//! them keep state of their own.

use serde::Serialize;

use crate::aspect_ratio::{AspectRatio, ALL_ASPECT_RATIOS};
use crate::metadata::{MetadataForm, MAX_SUGGESTED_SLIDE_COUNT, QUICK_PICK_SLIDE_COUNTS};
use crate::slide::{total_duration_secs, EditorSlide};
use crate::types::DbId;

/// Badge drawn above the slide caption.
pub const CANVAS_BADGE: &str = "Breaking News";

/// Publisher mark drawn in the canvas corner.
pub const CANVAS_BRAND: &str = "THE TIMES OF INDIA";

/// Maximum characters of caption shown under a timeline thumbnail.
pub const TEXT_PREVIEW_CHARS: usize = 80;

// ---------------------------------------------------------------------------
// Canvas
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanvasView {
    pub slide_id: Option<DbId>,
    pub image_url: Option<String>,
    pub text: String,
    pub badge: &'static str,
    pub brand: &'static str,
    pub is_playing: bool,
    /// Width of the progress bar in percent. Present only while playing.
    pub progress: Option<f64>,
}

/// Render the canvas for the active slide.
pub fn canvas_view(slide: Option<&EditorSlide>, is_playing: bool, progress: f64) -> CanvasView {
    CanvasView {
        slide_id: slide.map(|s| s.id),
        image_url: slide.and_then(|s| s.image_url.clone()),
        text: slide.map(|s| s.text_content.clone()).unwrap_or_default(),
        badge: CANVAS_BADGE,
        brand: CANVAS_BRAND,
        is_playing,
        progress: is_playing.then_some(progress),
    }
}

// ---------------------------------------------------------------------------
// Timeline
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineItem {
    pub index: usize,
    pub order_number: i32,
    pub slide_id: DbId,
    pub thumbnail_url: Option<String>,
    pub duration_label: String,
    pub text_preview: String,
    pub selected: bool,
    pub deletable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineView {
    pub heading: String,
    pub slide_count: usize,
    pub items: Vec<TimelineItem>,
}

/// Format a duration badge: `5s`, `2.5s`.
pub fn format_duration_label(secs: f64) -> String {
    if secs.fract() == 0.0 {
        format!("{}s", secs as i64)
    } else {
        format!("{secs}s")
    }
}

/// Shorten a caption to [`TEXT_PREVIEW_CHARS`] characters.
pub fn text_preview(text: &str) -> String {
    if text.chars().count() <= TEXT_PREVIEW_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(TEXT_PREVIEW_CHARS).collect();
    format!("{}...", cut.trim_end())
}

/// Render the slide strip.
pub fn timeline_view(slides: &[EditorSlide], selected: usize) -> TimelineView {
    TimelineView {
        heading: format!("Slides ({})", slides.len()),
        slide_count: slides.len(),
        items: slides
            .iter()
            .enumerate()
            .map(|(index, slide)| TimelineItem {
                index,
                order_number: index as i32 + 1,
                slide_id: slide.id,
                thumbnail_url: slide.image_url.clone(),
                duration_label: format_duration_label(slide.duration_secs),
                text_preview: text_preview(&slide.text_content),
                selected: index == selected,
                deletable: true,
            })
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditorHeader {
    pub title: String,
    pub subtitle: String,
}

/// Render the top bar: title plus `16:9 • 3 Slides • 14s`.
pub fn editor_header(title: &str, aspect_ratio: AspectRatio, slides: &[EditorSlide]) -> EditorHeader {
    let noun = if slides.len() == 1 { "Slide" } else { "Slides" };
    EditorHeader {
        title: title.to_string(),
        subtitle: format!(
            "{} \u{2022} {} {noun} \u{2022} {}",
            aspect_ratio,
            slides.len(),
            format_duration_label(total_duration_secs(slides))
        ),
    }
}

// ---------------------------------------------------------------------------
// Metadata dialog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AspectRatioOption {
    pub value: AspectRatio,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataDialogView {
    pub form: MetadataForm,
    pub aspect_ratios: Vec<AspectRatioOption>,
    pub quick_picks: Vec<QuickPick>,
    pub max_suggested_slide_count: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickPick {
    pub count: i32,
    pub selected: bool,
}

pub fn metadata_dialog_view(form: &MetadataForm) -> MetadataDialogView {
    MetadataDialogView {
        form: form.clone(),
        aspect_ratios: ALL_ASPECT_RATIOS
            .iter()
            .map(|r| AspectRatioOption {
                value: *r,
                label: r.label(),
                selected: *r == form.aspect_ratio,
            })
            .collect(),
        quick_picks: QUICK_PICK_SLIDE_COUNTS
            .iter()
            .map(|c| QuickPick {
                count: *c,
                selected: *c == form.slide_count,
            })
            .collect(),
        max_suggested_slide_count: MAX_SUGGESTED_SLIDE_COUNT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn slide(order: i32, duration: f64, text: &str) -> EditorSlide {
        EditorSlide {
            id: Uuid::new_v4(),
            slide_order: order,
            text_content: text.to_string(),
            image_url: Some(format!("https://img/{order}.jpg")),
            duration_secs: duration,
        }
    }

    #[test]
    fn canvas_hides_progress_when_paused() {
        let s = slide(1, 5.0, "Breaking");
        let paused = canvas_view(Some(&s), false, 40.0);
        assert_eq!(paused.progress, None);
        assert_eq!(paused.text, "Breaking");

        let playing = canvas_view(Some(&s), true, 40.0);
        assert_eq!(playing.progress, Some(40.0));
    }

    #[test]
    fn canvas_without_slide_is_empty() {
        let view = canvas_view(None, false, 0.0);
        assert_eq!(view.slide_id, None);
        assert!(view.text.is_empty());
    }

    #[test]
    fn timeline_numbers_and_badges() {
        let slides = vec![slide(1, 5.0, "a"), slide(2, 4.0, "b"), slide(3, 2.5, "c")];
        let view = timeline_view(&slides, 1);
        assert_eq!(view.heading, "Slides (3)");
        let numbers: Vec<i32> = view.items.iter().map(|i| i.order_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(view.items[2].duration_label, "2.5s");
        assert!(view.items[1].selected);
        assert!(!view.items[0].selected);
    }

    #[test]
    fn long_captions_are_shortened() {
        let long = "x".repeat(200);
        let preview = text_preview(&long);
        assert_eq!(preview.chars().count(), TEXT_PREVIEW_CHARS + 3);
        assert!(preview.ends_with("..."));
        assert_eq!(text_preview("short"), "short");
    }

    #[test]
    fn header_summarises_project() {
        let slides = vec![slide(1, 5.0, "a"), slide(2, 5.0, "b"), slide(3, 4.0, "c")];
        let header = editor_header("Revolutionary AI Platform", AspectRatio::Landscape, &slides);
        assert_eq!(header.subtitle, "16:9 \u{2022} 3 Slides \u{2022} 14s");
    }

    #[test]
    fn metadata_dialog_marks_selected_options() {
        let mut form = MetadataForm::new("t");
        form.aspect_ratio = AspectRatio::Square;
        let view = metadata_dialog_view(&form);
        let selected: Vec<&str> = view
            .aspect_ratios
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.label)
            .collect();
        assert_eq!(selected, vec!["Square"]);
        assert!(view.quick_picks.iter().any(|q| q.count == 5 && q.selected));
    }
}
