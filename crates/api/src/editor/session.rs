//! One live editor session.

use std::sync::Arc;

use newsreel_core::editor::{EditorState, EditorView};
use newsreel_core::types::DbId;
use newsreel_db::models::article::Article;
use serde::Serialize;
use tokio::sync::{watch, Mutex};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Shared handle to a session. Timer tasks hold a clone.
pub type SessionRef = Arc<Mutex<EditorSession>>;

/// Snapshot pushed to progress-stream subscribers on every change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressUpdate {
    pub selected_slide_index: usize,
    pub is_playing: bool,
    pub progress: f64,
    /// `true` when the last tick completed a loop.
    pub wrapped: bool,
}

pub struct EditorSession {
    pub id: DbId,
    pub state: EditorState,
    /// Article the session was opened from, used to draft slides.
    pub article: Option<Article>,
    last_active: Instant,
    pub(crate) playback_cancel: Option<CancellationToken>,
    pub(crate) generation_cancel: Option<CancellationToken>,
    progress_tx: watch::Sender<ProgressUpdate>,
}

impl EditorSession {
    pub fn new(id: DbId, article: Option<Article>) -> Self {
        let state = EditorState::new(
            article.as_ref().map(|a| a.id),
            article.as_ref().map(|a| a.title.as_str()),
        );
        let (progress_tx, _) = watch::channel(ProgressUpdate {
            selected_slide_index: 0,
            is_playing: false,
            progress: 0.0,
            wrapped: false,
        });
        Self {
            id,
            state,
            article,
            last_active: Instant::now(),
            playback_cancel: None,
            generation_cancel: None,
            progress_tx,
        }
    }

    pub fn view(&self) -> EditorView {
        self.state.view()
    }

    /// Mark the session as used now.
    pub fn touch(&mut self) {
        self.last_active = Instant::now();
    }

    pub fn last_active(&self) -> Instant {
        self.last_active
    }

    pub fn is_generating(&self) -> bool {
        self.generation_cancel.is_some()
    }

    pub fn subscribe_progress(&self) -> watch::Receiver<ProgressUpdate> {
        self.progress_tx.subscribe()
    }

    /// Push the current playback state to subscribers.
    pub fn publish_progress(&self, wrapped: bool) {
        self.progress_tx.send_replace(ProgressUpdate {
            selected_slide_index: self.state.selected_slide_index(),
            is_playing: self.state.is_playing(),
            progress: self.state.progress(),
            wrapped,
        });
    }

    /// Stop playback, drop any in-flight generation and cancel both timers.
    pub fn shut_down(&mut self) {
        self.state.shut_down();
        if let Some(cancel) = self.playback_cancel.take() {
            cancel.cancel();
        }
        if let Some(cancel) = self.generation_cancel.take() {
            cancel.cancel();
        }
        self.publish_progress(false);
    }
}
