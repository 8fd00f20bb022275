//! Editor view-state machine.
//!
//! One [`EditorState`] owns everything the editor page shows: which dialog
//! is open, the slide list, the selected slide, whether the preview is
//! playing, the playback counter and the toolbar. Phases only move forward:
//!
//! ```text
//! AwaitingMetadata --complete_metadata--> AwaitingTemplate --finish_generation--> Editing
//! ```
//!
//! Timers are not owned here. State changes that affect playback return a
//! [`PlaybackCommand`] telling the caller to start or stop its ticker, and
//! every such change bumps a playback epoch so ticks from a superseded timer
//! are ignored by [`EditorState::tick`].

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::metadata::{MetadataForm, MetadataFormPatch, VideoConfiguration, FALLBACK_TITLE};
use crate::playback::{ProgressCounter, Tick};
use crate::presentation::{
    canvas_view, editor_header, metadata_dialog_view, timeline_view, CanvasView, EditorHeader,
    MetadataDialogView, TimelineView,
};
use crate::slide::EditorSlide;
use crate::slide_order::validate_index;
use crate::template_dialog::{GenerationTicket, TemplateDialog, TemplateDialogView};
use crate::toolbar::{PanelSettingsPatch, ToolPanel, Toolbar, ToolbarView};
use crate::types::DbId;

/// Which part of the editor the user is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorPhase {
    AwaitingMetadata,
    AwaitingTemplate,
    Editing,
}

impl EditorPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AwaitingMetadata => "awaiting_metadata",
            Self::AwaitingTemplate => "awaiting_template",
            Self::Editing => "editing",
        }
    }
}

/// What the owner of the playback timer must do after a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    /// (Re)start the ticker for `epoch`, replacing any running one.
    Start { epoch: u64 },
    /// Stop any running ticker.
    Stop,
    /// Leave the ticker alone.
    Unchanged,
}

/// Consolidated state of one editing session.
#[derive(Debug)]
pub struct EditorState {
    article_id: Option<DbId>,
    phase: EditorPhase,
    metadata: MetadataForm,
    configuration: Option<VideoConfiguration>,
    project_id: Option<DbId>,
    template_dialog: TemplateDialog,
    template_id: Option<DbId>,
    slides: Vec<EditorSlide>,
    selected_slide_index: usize,
    is_playing: bool,
    counter: Option<ProgressCounter>,
    playback_epoch: u64,
    toolbar: Toolbar,
}

/// Editing surface: canvas, timeline, toolbar and header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditingSurfaceView {
    pub header: EditorHeader,
    pub canvas: CanvasView,
    pub timeline: TimelineView,
    pub toolbar: ToolbarView,
    pub selected_slide_index: usize,
    pub is_playing: bool,
    pub play_label: &'static str,
}

/// Full rendering of a session. Exactly one of the three optional parts is
/// present, matching `phase`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditorView {
    pub phase: EditorPhase,
    pub article_id: Option<DbId>,
    pub project_id: Option<DbId>,
    pub template_id: Option<DbId>,
    pub metadata_dialog: Option<MetadataDialogView>,
    pub template_dialog: Option<TemplateDialogView>,
    pub surface: Option<EditingSurfaceView>,
}

fn phase_conflict(expected: EditorPhase, actual: EditorPhase) -> CoreError {
    CoreError::Conflict(format!(
        "Editor is in phase '{}', expected '{}'",
        actual.as_str(),
        expected.as_str()
    ))
}

impl EditorState {
    /// A new session showing the metadata dialog. The title field is
    /// prefilled with `default_title`, or a placeholder when there is none.
    pub fn new(article_id: Option<DbId>, default_title: Option<&str>) -> Self {
        Self {
            article_id,
            phase: EditorPhase::AwaitingMetadata,
            metadata: MetadataForm::new(default_title.unwrap_or(FALLBACK_TITLE)),
            configuration: None,
            project_id: None,
            template_dialog: TemplateDialog::new(),
            template_id: None,
            slides: Vec::new(),
            selected_slide_index: 0,
            is_playing: false,
            counter: None,
            playback_epoch: 0,
            toolbar: Toolbar::new(),
        }
    }

    // -- accessors ----------------------------------------------------------

    pub fn phase(&self) -> EditorPhase {
        self.phase
    }

    pub fn article_id(&self) -> Option<DbId> {
        self.article_id
    }

    pub fn project_id(&self) -> Option<DbId> {
        self.project_id
    }

    pub fn configuration(&self) -> Option<&VideoConfiguration> {
        self.configuration.as_ref()
    }

    pub fn slides(&self) -> &[EditorSlide] {
        &self.slides
    }

    pub fn selected_slide_index(&self) -> usize {
        self.selected_slide_index
    }

    pub fn selected_slide(&self) -> Option<&EditorSlide> {
        self.slides.get(self.selected_slide_index)
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn playback_epoch(&self) -> u64 {
        self.playback_epoch
    }

    /// Current progress in percent; 0 when not playing.
    pub fn progress(&self) -> f64 {
        match (&self.counter, self.is_playing) {
            (Some(counter), true) => counter.progress(),
            _ => 0.0,
        }
    }

    fn require_phase(&self, expected: EditorPhase) -> Result<(), CoreError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(phase_conflict(expected, self.phase))
        }
    }

    // -- metadata -----------------------------------------------------------

    /// Edit the metadata form. Returns `false` when the patch asked for a
    /// quick-pick value that is not offered.
    pub fn update_metadata(&mut self, patch: MetadataFormPatch) -> Result<bool, CoreError> {
        self.require_phase(EditorPhase::AwaitingMetadata)?;
        Ok(self.metadata.apply(patch))
    }

    /// The configuration the metadata form would hand off right now.
    pub fn metadata_configuration(&self) -> Result<VideoConfiguration, CoreError> {
        self.require_phase(EditorPhase::AwaitingMetadata)?;
        Ok(self.metadata.confirm())
    }

    /// Record the project created from `configuration` and open the template
    /// dialog.
    pub fn complete_metadata(
        &mut self,
        project_id: DbId,
        configuration: VideoConfiguration,
    ) -> Result<(), CoreError> {
        self.require_phase(EditorPhase::AwaitingMetadata)?;
        self.project_id = Some(project_id);
        self.configuration = Some(configuration);
        self.phase = EditorPhase::AwaitingTemplate;
        Ok(())
    }

    // -- template -----------------------------------------------------------

    pub fn select_template(&mut self, template_id: DbId) -> Result<(), CoreError> {
        self.require_phase(EditorPhase::AwaitingTemplate)?;
        self.template_dialog.select(template_id)
    }

    pub fn begin_generation(&mut self) -> Result<(GenerationTicket, DbId), CoreError> {
        self.require_phase(EditorPhase::AwaitingTemplate)?;
        self.template_dialog.begin_generation()
    }

    pub fn is_generation_current(&self, ticket: GenerationTicket) -> bool {
        self.phase == EditorPhase::AwaitingTemplate && self.template_dialog.is_current(ticket)
    }

    /// Accept a finished generation and open the editing surface with
    /// `slides`. Returns `false` (and changes nothing) for stale tickets.
    pub fn finish_generation(&mut self, ticket: GenerationTicket, slides: Vec<EditorSlide>) -> bool {
        if self.phase != EditorPhase::AwaitingTemplate {
            return false;
        }
        let Some(template_id) = self.template_dialog.finish(ticket) else {
            return false;
        };
        self.template_id = Some(template_id);
        self.slides = slides;
        self.selected_slide_index = 0;
        self.phase = EditorPhase::Editing;
        true
    }

    /// Record a failed generation. Returns `false` for stale tickets.
    pub fn fail_generation(&mut self, ticket: GenerationTicket, message: impl Into<String>) -> bool {
        self.phase == EditorPhase::AwaitingTemplate && self.template_dialog.fail(ticket, message)
    }

    pub fn cancel_template(&mut self) -> Result<(), CoreError> {
        self.require_phase(EditorPhase::AwaitingTemplate)?;
        self.template_dialog.cancel()
    }

    // -- playback -----------------------------------------------------------

    /// Reset progress and (re)start the counter for the selected slide if
    /// playing. Bumps the epoch either way.
    fn restart_playback(&mut self) -> Result<PlaybackCommand, CoreError> {
        self.playback_epoch += 1;
        self.counter = None;

        if !self.is_playing {
            return Ok(PlaybackCommand::Stop);
        }
        let Some(slide) = self.slides.get(self.selected_slide_index) else {
            self.is_playing = false;
            return Ok(PlaybackCommand::Stop);
        };
        match ProgressCounter::new(slide.duration_secs) {
            Ok(counter) => {
                self.counter = Some(counter);
                Ok(PlaybackCommand::Start {
                    epoch: self.playback_epoch,
                })
            }
            Err(e) => {
                self.is_playing = false;
                Err(e)
            }
        }
    }

    /// Start or stop the preview.
    ///
    /// Starting requires a selected slide with a positive duration.
    pub fn set_playing(&mut self, playing: bool) -> Result<PlaybackCommand, CoreError> {
        self.require_phase(EditorPhase::Editing)?;
        if playing && self.selected_slide().is_none() {
            return Err(CoreError::Conflict("There is no slide to preview".to_string()));
        }
        self.is_playing = playing;
        self.restart_playback()
    }

    pub fn toggle_playing(&mut self) -> Result<PlaybackCommand, CoreError> {
        let playing = !self.is_playing;
        self.set_playing(playing)
    }

    /// Select a slide by 0-based index. Progress resets to 0; if the preview
    /// is playing it restarts for the newly selected slide.
    pub fn select_slide(&mut self, index: usize) -> Result<PlaybackCommand, CoreError> {
        self.require_phase(EditorPhase::Editing)?;
        validate_index(index, self.slides.len())?;
        if index == self.selected_slide_index {
            return Ok(PlaybackCommand::Unchanged);
        }
        self.selected_slide_index = index;
        self.restart_playback()
    }

    /// Apply one timer tick issued for `epoch`. Ticks from a superseded
    /// timer, or arriving after playback stopped, return `None`.
    pub fn tick(&mut self, epoch: u64) -> Option<Tick> {
        if !self.is_playing || epoch != self.playback_epoch {
            return None;
        }
        self.counter.as_mut().map(ProgressCounter::tick)
    }

    // -- slides -------------------------------------------------------------

    pub fn slide_at(&self, index: usize) -> Result<&EditorSlide, CoreError> {
        validate_index(index, self.slides.len())?;
        Ok(&self.slides[index])
    }

    /// Remove the slide at `index` and renumber the rest `1..=N`.
    ///
    /// If the selected slide is removed, the selection moves to the slide
    /// that took its place (or the new last slide) and playback restarts.
    pub fn delete_slide(&mut self, index: usize) -> Result<(EditorSlide, PlaybackCommand), CoreError> {
        self.require_phase(EditorPhase::Editing)?;
        validate_index(index, self.slides.len())?;

        let removed = self.slides.remove(index);
        for (i, slide) in self.slides.iter_mut().enumerate() {
            slide.slide_order = i as i32 + 1;
        }

        let command = if index < self.selected_slide_index {
            self.selected_slide_index -= 1;
            PlaybackCommand::Unchanged
        } else if index == self.selected_slide_index {
            self.selected_slide_index = self
                .selected_slide_index
                .min(self.slides.len().saturating_sub(1));
            self.restart_playback()?
        } else {
            PlaybackCommand::Unchanged
        };

        Ok((removed, command))
    }

    /// Replace the slide list with the project's stored slides.
    ///
    /// The selection follows the selected slide by ID; if it is gone the
    /// selection stays at the same position (clamped to the new last slide).
    /// Playback restarts only when the selected slide or its duration
    /// changed. Outside the editing phase this does nothing.
    pub fn replace_slides(&mut self, slides: Vec<EditorSlide>) -> Result<PlaybackCommand, CoreError> {
        if self.phase != EditorPhase::Editing {
            return Ok(PlaybackCommand::Unchanged);
        }

        let previous = self.selected_slide().map(|s| (s.id, s.duration_secs));
        self.selected_slide_index = previous
            .and_then(|(id, _)| slides.iter().position(|s| s.id == id))
            .unwrap_or_else(|| self.selected_slide_index.min(slides.len().saturating_sub(1)));
        self.slides = slides;

        let current = self.selected_slide().map(|s| (s.id, s.duration_secs));
        if current == previous {
            Ok(PlaybackCommand::Unchanged)
        } else {
            self.restart_playback()
        }
    }

    // -- toolbar ------------------------------------------------------------

    pub fn toggle_tool(&mut self, panel: ToolPanel) -> Result<Option<ToolPanel>, CoreError> {
        self.require_phase(EditorPhase::Editing)?;
        Ok(self.toolbar.toggle(panel))
    }

    pub fn update_panel_settings(&mut self, patch: PanelSettingsPatch) -> Result<(), CoreError> {
        self.require_phase(EditorPhase::Editing)?;
        self.toolbar.settings.apply(patch)
    }

    // -- teardown -----------------------------------------------------------

    /// Stop playback and drop any in-flight generation.
    pub fn shut_down(&mut self) -> PlaybackCommand {
        self.template_dialog.abort();
        self.is_playing = false;
        self.counter = None;
        self.playback_epoch += 1;
        PlaybackCommand::Stop
    }

    // -- view ---------------------------------------------------------------

    pub fn view(&self) -> EditorView {
        let mut view = EditorView {
            phase: self.phase,
            article_id: self.article_id,
            project_id: self.project_id,
            template_id: self.template_id,
            metadata_dialog: None,
            template_dialog: None,
            surface: None,
        };

        match self.phase {
            EditorPhase::AwaitingMetadata => {
                view.metadata_dialog = Some(metadata_dialog_view(&self.metadata));
            }
            EditorPhase::AwaitingTemplate => {
                view.template_dialog = Some(self.template_dialog.view());
            }
            EditorPhase::Editing => {
                let (title, aspect_ratio) = match &self.configuration {
                    Some(c) => (c.title.as_str(), c.aspect_ratio),
                    None => (self.metadata.title.as_str(), self.metadata.aspect_ratio),
                };
                view.surface = Some(EditingSurfaceView {
                    header: editor_header(title, aspect_ratio, &self.slides),
                    canvas: canvas_view(self.selected_slide(), self.is_playing, self.progress()),
                    timeline: timeline_view(&self.slides, self.selected_slide_index),
                    toolbar: self.toolbar.view(),
                    selected_slide_index: self.selected_slide_index,
                    is_playing: self.is_playing,
                    play_label: if self.is_playing { "Pause" } else { "Preview" },
                });
            }
        }

        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspect_ratio::AspectRatio;
    use assert_matches::assert_matches;
    use uuid::Uuid;

    fn slide(order: i32, duration: f64) -> EditorSlide {
        EditorSlide {
            id: Uuid::new_v4(),
            slide_order: order,
            text_content: format!("Slide {order}"),
            image_url: None,
            duration_secs: duration,
        }
    }

    /// Drive a fresh state through metadata and template into `Editing`.
    fn editing_state(slides: Vec<EditorSlide>) -> EditorState {
        let mut state = EditorState::new(Some(Uuid::new_v4()), Some("Headline"));
        let config = state.metadata_configuration().unwrap();
        state.complete_metadata(Uuid::new_v4(), config).unwrap();
        state.select_template(Uuid::new_v4()).unwrap();
        let (ticket, _) = state.begin_generation().unwrap();
        assert!(state.finish_generation(ticket, slides));
        state
    }

    #[test]
    fn starts_awaiting_metadata_with_prefilled_title() {
        let state = EditorState::new(None, Some("Championship Finals"));
        assert_eq!(state.phase(), EditorPhase::AwaitingMetadata);
        let view = state.view();
        assert_eq!(view.metadata_dialog.unwrap().form.title, "Championship Finals");
        assert!(view.template_dialog.is_none());
        assert!(view.surface.is_none());
    }

    #[test]
    fn fallback_title_without_article() {
        let state = EditorState::new(None, None);
        assert_eq!(state.metadata_configuration().unwrap().title, FALLBACK_TITLE);
    }

    #[test]
    fn phases_move_forward_only() {
        let mut state = EditorState::new(None, Some("t"));
        assert_matches!(state.select_template(Uuid::new_v4()), Err(CoreError::Conflict(_)));
        assert_matches!(state.set_playing(true), Err(CoreError::Conflict(_)));

        let config = state.metadata_configuration().unwrap();
        state.complete_metadata(Uuid::new_v4(), config.clone()).unwrap();
        assert_eq!(state.phase(), EditorPhase::AwaitingTemplate);

        // No way back to the metadata form.
        assert_matches!(
            state.complete_metadata(Uuid::new_v4(), config),
            Err(CoreError::Conflict(_))
        );
        assert_matches!(
            state.update_metadata(MetadataFormPatch::default()),
            Err(CoreError::Conflict(_))
        );
    }

    #[test]
    fn metadata_patch_reaches_configuration() {
        let mut state = EditorState::new(None, Some("t"));
        state
            .update_metadata(MetadataFormPatch {
                aspect_ratio: Some(AspectRatio::Portrait),
                slide_count_input: Some("3".into()),
                ..Default::default()
            })
            .unwrap();
        let config = state.metadata_configuration().unwrap();
        assert_eq!(config.aspect_ratio, AspectRatio::Portrait);
        assert_eq!(config.slide_count, 3);
    }

    #[test]
    fn cancel_template_keeps_phase() {
        let mut state = EditorState::new(None, Some("t"));
        let config = state.metadata_configuration().unwrap();
        state.complete_metadata(Uuid::new_v4(), config).unwrap();
        state.select_template(Uuid::new_v4()).unwrap();
        state.cancel_template().unwrap();
        assert_eq!(state.phase(), EditorPhase::AwaitingTemplate);
        assert!(!state.view().template_dialog.unwrap().confirm_enabled);
    }

    #[test]
    fn finish_generation_opens_surface() {
        let state = editing_state(vec![slide(1, 5.0), slide(2, 5.0), slide(3, 4.0)]);
        assert_eq!(state.phase(), EditorPhase::Editing);
        let view = state.view();
        let surface = view.surface.unwrap();
        assert_eq!(surface.timeline.slide_count, 3);
        assert_eq!(surface.toolbar.tools.len(), 8);
        assert_eq!(surface.header.subtitle, "16:9 \u{2022} 3 Slides \u{2022} 14s");
        assert!(view.template_id.is_some());
    }

    #[test]
    fn stale_generation_is_ignored() {
        let mut state = EditorState::new(None, Some("t"));
        let config = state.metadata_configuration().unwrap();
        state.complete_metadata(Uuid::new_v4(), config).unwrap();
        state.select_template(Uuid::new_v4()).unwrap();
        let (ticket, _) = state.begin_generation().unwrap();
        state.shut_down();
        assert!(!state.finish_generation(ticket, vec![slide(1, 5.0)]));
        assert_eq!(state.phase(), EditorPhase::AwaitingTemplate);
    }

    #[test]
    fn play_starts_and_stop_resets_progress() {
        let mut state = editing_state(vec![slide(1, 5.0)]);
        let command = state.set_playing(true).unwrap();
        let epoch = state.playback_epoch();
        assert_eq!(command, PlaybackCommand::Start { epoch });

        for _ in 0..5 {
            state.tick(epoch);
        }
        assert!((state.progress() - 10.0).abs() < 1e-9);

        assert_eq!(state.toggle_playing().unwrap(), PlaybackCommand::Stop);
        assert_eq!(state.progress(), 0.0);
        assert!(state.tick(epoch).is_none());
    }

    #[test]
    fn changing_slide_while_playing_resets_progress() {
        let mut state = editing_state(vec![slide(1, 5.0), slide(2, 4.0)]);
        state.set_playing(true).unwrap();
        let old_epoch = state.playback_epoch();
        for _ in 0..10 {
            state.tick(old_epoch);
        }
        assert!(state.progress() > 0.0);

        let command = state.select_slide(1).unwrap();
        assert_eq!(
            command,
            PlaybackCommand::Start {
                epoch: state.playback_epoch()
            }
        );
        assert_ne!(state.playback_epoch(), old_epoch);
        assert_eq!(state.progress(), 0.0);
        assert!(state.is_playing());

        // Ticks from the previous timer are ignored.
        assert!(state.tick(old_epoch).is_none());
        assert_eq!(state.progress(), 0.0);

        let tick = state.tick(state.playback_epoch()).unwrap();
        assert!((tick.progress - 2.5).abs() < 1e-9);
    }

    #[test]
    fn selecting_out_of_range_is_rejected() {
        let mut state = editing_state(vec![slide(1, 5.0)]);
        assert_matches!(state.select_slide(1), Err(CoreError::Validation(_)));
        assert_eq!(state.select_slide(0).unwrap(), PlaybackCommand::Unchanged);
    }

    #[test]
    fn zero_duration_slide_refuses_playback() {
        let mut state = editing_state(vec![slide(1, 0.0)]);
        assert_matches!(state.set_playing(true), Err(CoreError::Validation(_)));
        assert!(!state.is_playing());
    }

    #[test]
    fn play_without_slides_is_a_conflict() {
        let mut state = editing_state(Vec::new());
        assert_matches!(state.set_playing(true), Err(CoreError::Conflict(_)));
    }

    #[test]
    fn deleting_slides_renumbers_and_moves_selection() {
        let mut state = editing_state(vec![slide(1, 5.0), slide(2, 5.0), slide(3, 4.0)]);
        state.select_slide(2).unwrap();

        let (removed, command) = state.delete_slide(0).unwrap();
        assert_eq!(removed.slide_order, 1);
        assert_eq!(command, PlaybackCommand::Unchanged);
        assert_eq!(state.selected_slide_index(), 1);
        let orders: Vec<i32> = state.slides().iter().map(|s| s.slide_order).collect();
        assert_eq!(orders, vec![1, 2]);

        // Deleting the selected last slide moves selection to the new last one.
        let (_, command) = state.delete_slide(1).unwrap();
        assert_eq!(command, PlaybackCommand::Stop);
        assert_eq!(state.selected_slide_index(), 0);
    }

    #[test]
    fn deleting_playing_slide_restarts_on_neighbour() {
        let mut state = editing_state(vec![slide(1, 5.0), slide(2, 3.0)]);
        state.set_playing(true).unwrap();
        let (_, command) = state.delete_slide(0).unwrap();
        assert_matches!(command, PlaybackCommand::Start { .. });
        let tick = state.tick(state.playback_epoch()).unwrap();
        assert!((tick.progress - 100.0 / 30.0).abs() < 1e-9);

        let (_, command) = state.delete_slide(0).unwrap();
        assert_eq!(command, PlaybackCommand::Stop);
        assert!(!state.is_playing());
    }

    #[test]
    fn replaced_slides_keep_selection_by_id() {
        let slides = vec![slide(1, 5.0), slide(2, 5.0), slide(3, 4.0)];
        let mut state = editing_state(slides.clone());
        state.select_slide(1).unwrap();
        state.set_playing(true).unwrap();
        let epoch = state.playback_epoch();

        // Slide 3 moved to the front; slide 2 is still selected.
        let mut reordered = vec![slides[2].clone(), slides[0].clone(), slides[1].clone()];
        for (i, s) in reordered.iter_mut().enumerate() {
            s.slide_order = i as i32 + 1;
        }
        assert_eq!(state.replace_slides(reordered).unwrap(), PlaybackCommand::Unchanged);
        assert_eq!(state.selected_slide_index(), 2);
        assert_eq!(state.selected_slide().unwrap().id, slides[1].id);
        assert_eq!(state.playback_epoch(), epoch);
        assert_eq!(state.view().surface.unwrap().timeline.slide_count, 3);
    }

    #[test]
    fn replaced_slides_restart_when_selected_slide_changes() {
        let slides = vec![slide(1, 5.0), slide(2, 5.0)];
        let mut state = editing_state(slides.clone());
        state.set_playing(true).unwrap();

        // Re-timed selected slide.
        let mut retimed = slides.clone();
        retimed[0].duration_secs = 2.0;
        let command = state.replace_slides(retimed).unwrap();
        assert_eq!(
            command,
            PlaybackCommand::Start {
                epoch: state.playback_epoch()
            }
        );
        let tick = state.tick(state.playback_epoch()).unwrap();
        assert!((tick.progress - 5.0).abs() < 1e-9);

        // Selected slide removed: selection stays at the same position.
        let command = state.replace_slides(vec![slides[1].clone()]).unwrap();
        assert_matches!(command, PlaybackCommand::Start { .. });
        assert_eq!(state.selected_slide().unwrap().id, slides[1].id);

        let command = state.replace_slides(Vec::new()).unwrap();
        assert_eq!(command, PlaybackCommand::Stop);
        assert!(!state.is_playing());
    }

    #[test]
    fn replacing_slides_before_editing_is_ignored() {
        let mut state = EditorState::new(None, Some("t"));
        assert_eq!(
            state.replace_slides(vec![slide(1, 5.0)]).unwrap(),
            PlaybackCommand::Unchanged
        );
        assert!(state.slides().is_empty());
    }

    #[test]
    fn toolbar_is_part_of_the_surface() {
        let mut state = editing_state(vec![slide(1, 5.0)]);
        assert_eq!(state.toggle_tool(ToolPanel::Animate).unwrap(), Some(ToolPanel::Animate));
        assert_eq!(state.toggle_tool(ToolPanel::Animate).unwrap(), None);
    }
}
