//! Template generation step.
//!
//! Confirming the template dialog waits out a fixed delay, then asks a
//! [`GenerationBackend`] for the project's slides. Success opens the editing
//! surface; failure is reported on the dialog and the selection is kept so
//! the user can retry. Completions are matched against the dialog's
//! [`GenerationTicket`], so a cancelled or superseded generation never
//! touches the session.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use newsreel_core::error::CoreError;
use newsreel_core::slide::{draft_slides, DraftSource, EditorSlide};
use newsreel_core::template_dialog::GenerationTicket;
use newsreel_core::types::DbId;
use newsreel_db::models::article::Article;
use newsreel_db::repositories::{TemplateRepo, VideoProjectRepo, VideoSlideRepo};
use newsreel_db::DbPool;
use tokio_util::sync::CancellationToken;

use super::session::{EditorSession, SessionRef};
use crate::error::AppError;

/// Everything the backend needs to produce a project's slides.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub project_id: DbId,
    pub template_id: DbId,
    pub slide_count: i32,
    pub title: String,
    pub article: Option<Article>,
}

impl GenerationRequest {
    /// Build the request from the session's current state.
    pub fn from_session(session: &EditorSession, template_id: DbId) -> Result<Self, CoreError> {
        let project_id = session.state.project_id().ok_or_else(|| {
            CoreError::Conflict("Session has no project yet".to_string())
        })?;
        let config = session.state.configuration().ok_or_else(|| {
            CoreError::Conflict("Session has no confirmed metadata".to_string())
        })?;
        Ok(Self {
            project_id,
            template_id,
            slide_count: config.slide_count,
            title: config.title.clone(),
            article: session.article.clone(),
        })
    }
}

/// Produces the slides of a project once a template is chosen.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate(&self, request: GenerationRequest) -> Result<Vec<EditorSlide>, AppError>;
}

/// Records the template on the project and drafts slides from the article
/// when the project has none.
pub struct PgGenerationBackend {
    pool: DbPool,
}

impl PgGenerationBackend {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GenerationBackend for PgGenerationBackend {
    async fn generate(&self, request: GenerationRequest) -> Result<Vec<EditorSlide>, AppError> {
        let template = TemplateRepo::find_by_id(&self.pool, request.template_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Template",
                id: request.template_id,
            })?;

        VideoProjectRepo::set_template(&self.pool, request.project_id, template.id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "VideoProject",
                id: request.project_id,
            })?;

        let source = match &request.article {
            Some(article) => article.draft_source(),
            None => DraftSource {
                title: &request.title,
                body: "",
                image_url: None,
            },
        };
        let drafts = draft_slides(
            source,
            request.slide_count.max(1) as usize,
            template.slide_duration_secs(),
        );

        let slides = VideoSlideRepo::insert_drafts(&self.pool, request.project_id, &drafts)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "VideoProject",
                id: request.project_id,
            })?;

        Ok(slides.iter().map(EditorSlide::from).collect())
    }
}

/// Spawn the delayed generation for `ticket`.
pub fn spawn(
    handle: &SessionRef,
    session: &mut EditorSession,
    ticket: GenerationTicket,
    request: GenerationRequest,
    delay: Duration,
    backend: Arc<dyn GenerationBackend>,
) {
    if let Some(previous) = session.generation_cancel.take() {
        previous.cancel();
    }
    let cancel = CancellationToken::new();
    session.generation_cancel = Some(cancel.clone());

    tracing::info!(
        session_id = %session.id,
        project_id = %request.project_id,
        template_id = %request.template_id,
        delay_ms = delay.as_millis() as u64,
        "Generation started"
    );

    tokio::spawn(run(handle.clone(), ticket, request, delay, backend, cancel));
}

async fn run(
    handle: SessionRef,
    ticket: GenerationTicket,
    request: GenerationRequest,
    delay: Duration,
    backend: Arc<dyn GenerationBackend>,
    cancel: CancellationToken,
) {
    tokio::select! {
        _ = cancel.cancelled() => return,
        _ = tokio::time::sleep(delay) => {}
    }

    if !handle.lock().await.state.is_generation_current(ticket) {
        return;
    }

    let result = tokio::select! {
        _ = cancel.cancelled() => return,
        result = backend.generate(request) => result,
    };

    let mut session = handle.lock().await;
    match result {
        Ok(slides) => {
            let count = slides.len();
            if session.state.finish_generation(ticket, slides) {
                session.generation_cancel = None;
                session.publish_progress(false);
                tracing::info!(session_id = %session.id, slides = count, "Generation finished");
            }
        }
        Err(e) => {
            if session.state.fail_generation(ticket, e.to_string()) {
                session.generation_cancel = None;
                tracing::warn!(session_id = %session.id, error = %e, "Generation failed");
            }
        }
    }
}
