use std::collections::HashMap;
use std::sync::Arc;

use newsreel_core::editor::{EditorPhase, PlaybackCommand};
use newsreel_core::error::CoreError;
use newsreel_core::slide::EditorSlide;
use newsreel_core::template_dialog::GenerationTicket;
use newsreel_core::types::DbId;
use newsreel_db::models::article::Article;
use newsreel_db::repositories::VideoSlideRepo;
use newsreel_db::DbPool;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use super::generation::{self, GenerationBackend, GenerationRequest};
use super::playback;
use super::session::{EditorSession, SessionRef};
use crate::config::EditorTimings;

/// Owns every live editor session.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application. Each session sits behind its own mutex so
/// requests against different sessions never contend.
pub struct SessionManager {
    sessions: RwLock<HashMap<DbId, SessionRef>>,
    timings: EditorTimings,
    backend: Arc<dyn GenerationBackend>,
}

impl SessionManager {
    pub fn new(timings: EditorTimings, backend: Arc<dyn GenerationBackend>) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            timings,
            backend,
        }
    }

    pub fn timings(&self) -> EditorTimings {
        self.timings
    }

    /// Open a new session, optionally seeded from an article.
    pub async fn open(&self, article: Option<Article>) -> SessionRef {
        let id = Uuid::new_v4();
        let article_id = article.as_ref().map(|a| a.id);
        let handle = Arc::new(Mutex::new(EditorSession::new(id, article)));
        self.sessions.write().await.insert(id, Arc::clone(&handle));
        tracing::info!(session_id = %id, article_id = ?article_id, "Editor session opened");
        handle
    }

    /// Look up a session by ID.
    pub async fn get(&self, id: DbId) -> Result<SessionRef, CoreError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(CoreError::NotFound {
                entity: "EditorSession",
                id,
            })
    }

    /// Close a session, tearing down its timers. Returns `false` if there
    /// was no such session.
    pub async fn close(&self, id: DbId) -> bool {
        let removed = self.sessions.write().await.remove(&id);
        match removed {
            Some(handle) => {
                handle.lock().await.shut_down();
                tracing::info!(session_id = %id, "Editor session closed");
                true
            }
            None => false,
        }
    }

    /// Number of open sessions.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Carry out a playback command for `session` with the configured tick.
    pub fn apply_playback(
        &self,
        handle: &SessionRef,
        session: &mut EditorSession,
        command: PlaybackCommand,
    ) {
        playback::apply(handle, session, command, self.timings.tick_interval);
    }

    /// Start the delayed generation for a confirmed template.
    pub fn start_generation(
        &self,
        handle: &SessionRef,
        session: &mut EditorSession,
        ticket: GenerationTicket,
        request: GenerationRequest,
    ) {
        generation::spawn(
            handle,
            session,
            ticket,
            request,
            self.timings.generation_delay,
            Arc::clone(&self.backend),
        );
    }

    /// Reload the slides of every editing session on `project_id` from the
    /// database. Called after any slide write outside the session. Returns
    /// how many sessions were refreshed.
    ///
    /// Slides are read while the session is locked, so the last refresh to
    /// run always sees the latest write.
    pub async fn sync_project_slides(
        &self,
        pool: &DbPool,
        project_id: DbId,
    ) -> Result<usize, sqlx::Error> {
        let handles: Vec<SessionRef> = self.sessions.read().await.values().cloned().collect();

        let mut refreshed = 0;
        for handle in handles {
            let mut session = handle.lock().await;
            if session.state.phase() != EditorPhase::Editing
                || session.state.project_id() != Some(project_id)
            {
                continue;
            }

            let slides: Vec<EditorSlide> = VideoSlideRepo::list_by_project(pool, project_id)
                .await?
                .iter()
                .map(EditorSlide::from)
                .collect();
            let session_id = session.id;
            let command = session.state.replace_slides(slides).unwrap_or_else(|e| {
                tracing::warn!(%session_id, error = %e, "Playback stopped after slide refresh");
                PlaybackCommand::Stop
            });
            self.apply_playback(&handle, &mut session, command);
            session.publish_progress(false);
            refreshed += 1;
        }

        if refreshed > 0 {
            tracing::debug!(%project_id, sessions = refreshed, "Editor slides refreshed");
        }
        Ok(refreshed)
    }

    /// Close every session idle for longer than the configured TTL.
    /// Returns how many were closed.
    pub async fn reap_idle(&self) -> usize {
        let ttl = self.timings.session_idle_ttl;
        let candidates: Vec<(DbId, SessionRef)> = self
            .sessions
            .read()
            .await
            .iter()
            .map(|(id, handle)| (*id, Arc::clone(handle)))
            .collect();

        let mut idle = Vec::new();
        for (id, handle) in candidates {
            let session = handle.lock().await;
            if session.last_active().elapsed() > ttl {
                idle.push(id);
            }
        }

        let mut closed = 0;
        for id in idle {
            if self.close(id).await {
                closed += 1;
            }
        }
        closed
    }

    /// Close every session. Used during graceful shutdown.
    pub async fn shutdown_all(&self) {
        let drained: Vec<SessionRef> = self.sessions.write().await.drain().map(|(_, h)| h).collect();
        for handle in drained {
            handle.lock().await.shut_down();
        }
    }
}
