//! Editor toolbar: a single-select strip of styling panels.
//!
//! Panel contents are local to the toolbar. Nothing here writes back into
//! slides or projects; the settings live and die with the editor session.

use serde::{Deserialize, Serialize};

use crate::aspect_ratio::AspectRatio;
use crate::error::CoreError;
use crate::types::DbId;

/// The eight panels behind the toolbar icon strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolPanel {
    Visuals,
    Audio,
    Text,
    Animate,
    Logos,
    Themes,
    Video,
    Voiceover,
}

/// Panels in icon-strip order.
pub const ALL_PANELS: [ToolPanel; 8] = [
    ToolPanel::Visuals,
    ToolPanel::Audio,
    ToolPanel::Text,
    ToolPanel::Animate,
    ToolPanel::Logos,
    ToolPanel::Themes,
    ToolPanel::Video,
    ToolPanel::Voiceover,
];

impl ToolPanel {
    pub fn id(self) -> &'static str {
        match self {
            Self::Visuals => "visuals",
            Self::Audio => "audio",
            Self::Text => "text",
            Self::Animate => "animate",
            Self::Logos => "logos",
            Self::Themes => "themes",
            Self::Video => "video",
            Self::Voiceover => "voiceover",
        }
    }

    /// Short label under the icon.
    pub fn label(self) -> &'static str {
        match self {
            Self::Visuals => "Visuals",
            Self::Audio => "Audio",
            Self::Text => "Text",
            Self::Animate => "Animate",
            Self::Logos => "Logos",
            Self::Themes => "Themes",
            Self::Video => "Video",
            Self::Voiceover => "VO",
        }
    }

    /// Heading shown at the top of the open panel.
    pub fn title(self) -> &'static str {
        match self {
            Self::Visuals => "Visuals",
            Self::Audio => "Audio",
            Self::Text => "Text Styling",
            Self::Animate => "Animation Effects",
            Self::Logos => "Brand Logos",
            Self::Themes => "Themes",
            Self::Video => "Video Settings",
            Self::Voiceover => "Voiceover",
        }
    }
}

// ---------------------------------------------------------------------------
// Panel option catalogs
// ---------------------------------------------------------------------------

pub const FONT_FAMILIES: &[&str] = &["Merriweather", "Open Sans", "Roboto"];

pub const ANIMATION_EFFECTS: &[&str] = &["Fade", "Slide", "Zoom In", "Pan Left"];

pub const DEFAULT_FONT_SIZE: i32 = 32;

pub const DEFAULT_TEXT_COLOR: &str = "#FFFFFF";

pub const DEFAULT_VIDEO_DURATION_SECS: i32 = 30;

pub const DEFAULT_VIDEO_FPS: i32 = 30;

// ---------------------------------------------------------------------------
// Panel settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextSettings {
    pub font_size: i32,
    pub font_family: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoSettings {
    pub aspect_ratio: AspectRatio,
    pub duration_secs: i32,
    pub fps: i32,
}

/// Local state of every panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelSettings {
    pub text: TextSettings,
    pub animation_effect: Option<String>,
    pub video: VideoSettings,
    pub theme_id: Option<DbId>,
    pub audio_track_id: Option<DbId>,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            text: TextSettings {
                font_size: DEFAULT_FONT_SIZE,
                font_family: FONT_FAMILIES[0].to_string(),
                color: DEFAULT_TEXT_COLOR.to_string(),
            },
            animation_effect: None,
            video: VideoSettings {
                aspect_ratio: AspectRatio::default(),
                duration_secs: DEFAULT_VIDEO_DURATION_SECS,
                fps: DEFAULT_VIDEO_FPS,
            },
            theme_id: None,
            audio_track_id: None,
        }
    }
}

/// Partial update of the panel settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PanelSettingsPatch {
    pub font_size: Option<i32>,
    pub font_family: Option<String>,
    pub color: Option<String>,
    pub animation_effect: Option<String>,
    pub aspect_ratio: Option<AspectRatio>,
    pub duration_secs: Option<i32>,
    pub fps: Option<i32>,
    pub theme_id: Option<DbId>,
    pub audio_track_id: Option<DbId>,
}

fn validate_positive(field: &str, value: i32) -> Result<(), CoreError> {
    if value <= 0 {
        return Err(CoreError::Validation(format!(
            "{field} must be > 0, got {value}"
        )));
    }
    Ok(())
}

fn validate_choice(field: &str, value: &str, allowed: &[&str]) -> Result<(), CoreError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid {field} '{value}'. Must be one of: {}",
            allowed.join(", ")
        )))
    }
}

fn validate_hex_color(value: &str) -> Result<(), CoreError> {
    let valid = value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "color must be a #RRGGBB hex value, got '{value}'"
        )))
    }
}

impl PanelSettings {
    /// Validate the whole patch, then apply it. Nothing is applied if any
    /// field is invalid.
    pub fn apply(&mut self, patch: PanelSettingsPatch) -> Result<(), CoreError> {
        if let Some(size) = patch.font_size {
            validate_positive("font_size", size)?;
        }
        if let Some(family) = &patch.font_family {
            validate_choice("font_family", family, FONT_FAMILIES)?;
        }
        if let Some(color) = &patch.color {
            validate_hex_color(color)?;
        }
        if let Some(effect) = &patch.animation_effect {
            validate_choice("animation_effect", effect, ANIMATION_EFFECTS)?;
        }
        if let Some(duration) = patch.duration_secs {
            validate_positive("duration_secs", duration)?;
        }
        if let Some(fps) = patch.fps {
            validate_positive("fps", fps)?;
        }

        if let Some(size) = patch.font_size {
            self.text.font_size = size;
        }
        if let Some(family) = patch.font_family {
            self.text.font_family = family;
        }
        if let Some(color) = patch.color {
            self.text.color = color;
        }
        if patch.animation_effect.is_some() {
            self.animation_effect = patch.animation_effect;
        }
        if let Some(ratio) = patch.aspect_ratio {
            self.video.aspect_ratio = ratio;
        }
        if let Some(duration) = patch.duration_secs {
            self.video.duration_secs = duration;
        }
        if let Some(fps) = patch.fps {
            self.video.fps = fps;
        }
        if patch.theme_id.is_some() {
            self.theme_id = patch.theme_id;
        }
        if patch.audio_track_id.is_some() {
            self.audio_track_id = patch.audio_track_id;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Toolbar
// ---------------------------------------------------------------------------

/// Which panel is open, plus the panels' local settings.
#[derive(Debug, Clone, Default)]
pub struct Toolbar {
    active: Option<ToolPanel>,
    pub settings: PanelSettings,
}

/// One icon of the strip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolButton {
    pub id: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Rendering of the toolbar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolbarView {
    pub tools: Vec<ToolButton>,
    pub active_panel: Option<ToolPanel>,
    pub panel_title: Option<&'static str>,
    pub settings: PanelSettings,
}

impl Toolbar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<ToolPanel> {
        self.active
    }

    /// Select a panel. Selecting the open panel again collapses it.
    pub fn toggle(&mut self, panel: ToolPanel) -> Option<ToolPanel> {
        self.active = if self.active == Some(panel) {
            None
        } else {
            Some(panel)
        };
        self.active
    }

    pub fn view(&self) -> ToolbarView {
        ToolbarView {
            tools: ALL_PANELS
                .iter()
                .map(|p| ToolButton {
                    id: p.id(),
                    label: p.label(),
                    active: self.active == Some(*p),
                })
                .collect(),
            active_panel: self.active,
            panel_title: self.active.map(ToolPanel::title),
            settings: self.settings.clone(),
        }
    }
}
