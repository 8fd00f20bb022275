//! Video metadata form (the first dialog of the editor).
//!
//! The form collects title, description, aspect ratio, slide count and
//! keywords and hands a [`VideoConfiguration`] to whoever completes it. The
//! only normalisation it performs is coercing the slide-count input.

use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};

use crate::aspect_ratio::AspectRatio;

/// Slide count the form starts with.
pub const DEFAULT_SLIDE_COUNT: i32 = 5;

/// Smallest slide count the input accepts; anything lower is coerced to it.
pub const MIN_SLIDE_COUNT: i32 = 1;

/// Upper bound advertised by the numeric input. Not enforced.
pub const MAX_SUGGESTED_SLIDE_COUNT: i32 = 20;

/// Quick-pick buttons next to the slide count input.
pub const QUICK_PICK_SLIDE_COUNTS: [i32; 3] = [3, 5, 10];

/// Title used when the session was opened without an article.
pub const FALLBACK_TITLE: &str = "Untitled Video";

/// Configuration handed off when the metadata form is confirmed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoConfiguration {
    pub title: String,
    pub description: Option<String>,
    pub aspect_ratio: AspectRatio,
    pub slide_count: i32,
    pub keywords: Vec<String>,
}

/// Editable state of the metadata form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataForm {
    pub title: String,
    pub description: String,
    pub aspect_ratio: AspectRatio,
    pub slide_count: i32,
    pub keywords_input: String,
}

/// Partial update of the form fields. Absent fields keep their value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetadataFormPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub aspect_ratio: Option<AspectRatio>,
    /// Raw text of the numeric input, coerced by [`parse_slide_count`].
    pub slide_count_input: Option<String>,
    /// One of the quick-pick values.
    pub quick_pick: Option<i32>,
    pub keywords_input: Option<String>,
}

impl MetadataForm {
    /// A fresh form with its title prefilled.
    pub fn new(default_title: impl Into<String>) -> Self {
        Self {
            title: default_title.into(),
            description: String::new(),
            aspect_ratio: AspectRatio::default(),
            slide_count: DEFAULT_SLIDE_COUNT,
            keywords_input: String::new(),
        }
    }

    /// Set the slide count from the raw numeric input text.
    pub fn set_slide_count_input(&mut self, raw: &str) {
        self.slide_count = parse_slide_count(raw);
    }

    /// Apply one of the quick-pick buttons. Returns `false` for values that
    /// are not offered as quick picks.
    pub fn pick_quick_count(&mut self, count: i32) -> bool {
        if QUICK_PICK_SLIDE_COUNTS.contains(&count) {
            self.slide_count = count;
            true
        } else {
            false
        }
    }

    /// Apply a partial update. Returns `false` if the patch named a
    /// quick-pick value that is not offered (the rest is still applied).
    pub fn apply(&mut self, patch: MetadataFormPatch) -> bool {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(ratio) = patch.aspect_ratio {
            self.aspect_ratio = ratio;
        }
        if let Some(raw) = patch.slide_count_input {
            self.set_slide_count_input(&raw);
        }
        if let Some(keywords) = patch.keywords_input {
            self.keywords_input = keywords;
        }
        match patch.quick_pick {
            Some(count) => self.pick_quick_count(count),
            None => true,
        }
    }

    /// Produce the configuration handed to the caller.
    pub fn confirm(&self) -> VideoConfiguration {
        let description = self.description.trim();
        VideoConfiguration {
            title: self.title.clone(),
            description: (!description.is_empty()).then(|| description.to_string()),
            aspect_ratio: self.aspect_ratio,
            slide_count: self.slide_count,
            keywords: parse_keywords(&self.keywords_input),
        }
    }
}

/// Coerce the slide-count input.
///
/// Reads the leading integer of the (trimmed) text, the way a browser number
/// field hands it over: `"12abc"` reads as 12. Non-numeric text and values
/// below [`MIN_SLIDE_COUNT`] become 1. There is no upper clamp; numbers too
/// large for an `i32` saturate to `i32::MAX`.
pub fn parse_slide_count(raw: &str) -> i32 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    let magnitude = match digits[..end].parse::<i32>() {
        Ok(n) => n,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => i32::MAX,
        Err(_) => return MIN_SLIDE_COUNT,
    };

    if negative {
        MIN_SLIDE_COUNT
    } else {
        magnitude.max(MIN_SLIDE_COUNT)
    }
}

/// Split comma-separated keywords into a de-duplicated, trimmed list.
///
/// Duplicates are compared case-insensitively; the first spelling wins.
pub fn parse_keywords(raw: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for keyword in raw.split(',').map(str::trim).filter(|k| !k.is_empty()) {
        if !keywords.iter().any(|k| k.eq_ignore_ascii_case(keyword)) {
            keywords.push(keyword.to_string());
        }
    }
    keywords
}
