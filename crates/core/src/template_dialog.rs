//! Template selection dialog state.
//!
//! The user picks exactly one template from the catalog and confirms. Confirm
//! starts a generation step that finishes after a fixed artificial delay;
//! while it is in flight both controls are disabled and the selection is
//! frozen. Each generation is identified by a [`GenerationTicket`] so that a
//! completion arriving for a superseded or aborted generation is ignored.

use std::time::Duration;

use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

/// Artificial delay standing in for the generation request.
pub const GENERATION_DELAY: Duration = Duration::from_millis(2000);

/// Confirm button label while idle.
pub const CONFIRM_LABEL: &str = "Generate Video";

/// Confirm button label while generation is in flight.
pub const GENERATING_LABEL: &str = "Generating...";

/// Identifies one confirm action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GenerationTicket(u64);

/// Selection and generation state of the dialog.
#[derive(Debug, Default)]
pub struct TemplateDialog {
    selected: Option<DbId>,
    in_flight: Option<GenerationTicket>,
    issued: u64,
    last_error: Option<String>,
}

/// Rendering of the dialog controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateDialogView {
    pub selected_template_id: Option<DbId>,
    pub is_generating: bool,
    pub confirm_enabled: bool,
    pub cancel_enabled: bool,
    pub confirm_label: &'static str,
    pub last_error: Option<String>,
}

impl TemplateDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<DbId> {
        self.selected
    }

    pub fn is_generating(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Confirm is enabled once a template is selected and nothing is in flight.
    pub fn can_confirm(&self) -> bool {
        self.selected.is_some() && self.in_flight.is_none()
    }

    /// Cancel is disabled while generation is in flight.
    pub fn can_cancel(&self) -> bool {
        self.in_flight.is_none()
    }

    /// Select a template, replacing any previous selection.
    pub fn select(&mut self, template_id: DbId) -> Result<(), CoreError> {
        if self.is_generating() {
            return Err(CoreError::Conflict(
                "Cannot change the template while generation is in progress".to_string(),
            ));
        }
        self.selected = Some(template_id);
        Ok(())
    }

    /// Start generation for the selected template.
    pub fn begin_generation(&mut self) -> Result<(GenerationTicket, DbId), CoreError> {
        if self.is_generating() {
            return Err(CoreError::Conflict(
                "Generation is already in progress".to_string(),
            ));
        }
        let template_id = self.selected.ok_or_else(|| {
            CoreError::Conflict("Select a template before generating".to_string())
        })?;

        self.issued += 1;
        let ticket = GenerationTicket(self.issued);
        self.in_flight = Some(ticket);
        self.last_error = None;
        Ok((ticket, template_id))
    }

    /// Whether `ticket` identifies the generation currently in flight.
    pub fn is_current(&self, ticket: GenerationTicket) -> bool {
        self.in_flight == Some(ticket)
    }

    /// Accept the completion of `ticket`.
    ///
    /// Returns the generated template id the first time the current ticket
    /// completes and `None` for stale or repeated completions.
    pub fn finish(&mut self, ticket: GenerationTicket) -> Option<DbId> {
        if !self.is_current(ticket) {
            return None;
        }
        self.in_flight = None;
        self.selected
    }

    /// Record a failed generation. The selection is kept so the user can
    /// retry. Returns `false` for stale tickets.
    pub fn fail(&mut self, ticket: GenerationTicket, message: impl Into<String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.in_flight = None;
        self.last_error = Some(message.into());
        true
    }

    /// Dismiss the dialog without choosing: clears the selection.
    pub fn cancel(&mut self) -> Result<(), CoreError> {
        if self.is_generating() {
            return Err(CoreError::Conflict(
                "Cannot cancel while generation is in progress".to_string(),
            ));
        }
        self.selected = None;
        self.last_error = None;
        Ok(())
    }

    /// Drop any in-flight generation, e.g. when the session closes.
    pub fn abort(&mut self) {
        self.in_flight = None;
    }

    pub fn view(&self) -> TemplateDialogView {
        TemplateDialogView {
            selected_template_id: self.selected,
            is_generating: self.is_generating(),
            confirm_enabled: self.can_confirm(),
            cancel_enabled: self.can_cancel(),
            confirm_label: if self.is_generating() {
                GENERATING_LABEL
            } else {
                CONFIRM_LABEL
            },
            last_error: self.last_error.clone(),
        }
    }
}
