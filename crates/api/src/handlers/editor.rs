//! Handlers for `/editor/sessions`.
//!
//! Every handler locks exactly one session for its whole body, so the state
//! machine sees requests for a session one at a time.

use std::convert::Infallible;
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::Json;
use futures::{stream, Stream};
use newsreel_core::editor::EditorView;
use newsreel_core::error::CoreError;
use newsreel_core::metadata::{MetadataFormPatch, QUICK_PICK_SLIDE_COUNTS};
use newsreel_core::toolbar::{PanelSettingsPatch, ToolPanel};
use newsreel_core::types::DbId;
use newsreel_db::models::video_project::CreateVideoProject;
use newsreel_db::repositories::{ArticleRepo, TemplateRepo, VideoProjectRepo, VideoSlideRepo};
use serde::{Deserialize, Serialize};

use crate::editor::{GenerationRequest, ProgressUpdate};
use crate::error::AppResult;
use crate::query::ArticleParam;
use crate::response::DataResponse;
use crate::state::AppState;

/// A session's ID together with its current rendering.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub session_id: DbId,
    #[serde(flatten)]
    pub view: EditorView,
}

type SessionResponse = Json<DataResponse<SessionView>>;

fn respond(session_id: DbId, view: EditorView) -> SessionResponse {
    Json(DataResponse {
        data: SessionView { session_id, view },
    })
}

#[derive(Debug, Deserialize)]
pub struct SelectTemplate {
    pub template_id: DbId,
}

#[derive(Debug, Deserialize)]
pub struct SelectSlide {
    pub index: usize,
}

/// Toolbar request: toggle a panel, patch panel settings, or both.
#[derive(Debug, Default, Deserialize)]
pub struct ToolbarUpdate {
    pub panel: Option<ToolPanel>,
    pub settings: Option<PanelSettingsPatch>,
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

/// POST /api/v1/editor/sessions?article=<id>
pub async fn open(
    State(state): State<AppState>,
    Query(params): Query<ArticleParam>,
) -> AppResult<(StatusCode, SessionResponse)> {
    let article = match params.article {
        Some(id) => Some(ArticleRepo::find_by_id(&state.pool, id).await?.ok_or(
            CoreError::NotFound {
                entity: "Article",
                id,
            },
        )?),
        None => None,
    };

    let handle = state.sessions.open(article).await;
    let session = handle.lock().await;
    Ok((StatusCode::CREATED, respond(session.id, session.view())))
}

/// GET /api/v1/editor/sessions/{id}
pub async fn get_view(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<SessionResponse> {
    let handle = state.sessions.get(id).await?;
    let mut session = handle.lock().await;
    session.touch();
    Ok(respond(id, session.view()))
}

/// DELETE /api/v1/editor/sessions/{id}
pub async fn close(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if state.sessions.close(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::NotFound {
            entity: "EditorSession",
            id,
        }
        .into())
    }
}

// ---------------------------------------------------------------------------
// Metadata dialog
// ---------------------------------------------------------------------------

/// PUT /api/v1/editor/sessions/{id}/metadata
///
/// Numeric slide-count input is coerced, never rejected. A `quick_pick`
/// outside the offered values is a validation error (other fields in the
/// same request are still applied).
pub async fn update_metadata(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(patch): Json<MetadataFormPatch>,
) -> AppResult<SessionResponse> {
    let handle = state.sessions.get(id).await?;
    let mut session = handle.lock().await;
    session.touch();

    let quick_pick = patch.quick_pick;
    if !session.state.update_metadata(patch)? {
        return Err(CoreError::Validation(format!(
            "quick_pick {} is not one of {QUICK_PICK_SLIDE_COUNTS:?}",
            quick_pick.unwrap_or_default()
        ))
        .into());
    }
    Ok(respond(id, session.view()))
}

/// POST /api/v1/editor/sessions/{id}/metadata/confirm
///
/// Creates the project from the form and opens the template dialog.
pub async fn confirm_metadata(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<SessionResponse> {
    let handle = state.sessions.get(id).await?;
    let mut session = handle.lock().await;
    session.touch();

    let config = session.state.metadata_configuration()?;
    if config.title.trim().is_empty() {
        return Err(CoreError::Validation("title must not be empty".to_string()).into());
    }

    let input = CreateVideoProject::from_configuration(
        session.state.article_id(),
        session.article.as_ref().and_then(|a| a.thumbnail_url.clone()),
        &config,
    );
    let project = VideoProjectRepo::create(&state.pool, &input).await?;
    session.state.complete_metadata(project.id, config)?;

    tracing::info!(session_id = %id, project_id = %project.id, "Metadata confirmed");
    Ok(respond(id, session.view()))
}

// ---------------------------------------------------------------------------
// Template dialog
// ---------------------------------------------------------------------------

/// PUT /api/v1/editor/sessions/{id}/template
pub async fn select_template(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SelectTemplate>,
) -> AppResult<SessionResponse> {
    let handle = state.sessions.get(id).await?;
    let mut session = handle.lock().await;
    session.touch();

    let template = TemplateRepo::find_by_id(&state.pool, input.template_id)
        .await?
        .filter(|t| t.is_active)
        .ok_or(CoreError::NotFound {
            entity: "Template",
            id: input.template_id,
        })?;
    session.state.select_template(template.id)?;
    Ok(respond(id, session.view()))
}

/// POST /api/v1/editor/sessions/{id}/template/confirm
///
/// Starts generation. The session reaches the editing phase once the
/// generation delay has passed and the backend succeeded.
pub async fn confirm_template(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, SessionResponse)> {
    let handle = state.sessions.get(id).await?;
    let mut session = handle.lock().await;
    session.touch();

    let (ticket, template_id) = session.state.begin_generation()?;
    let request = match GenerationRequest::from_session(&session, template_id) {
        Ok(request) => request,
        Err(e) => {
            session.state.fail_generation(ticket, e.to_string());
            return Err(e.into());
        }
    };
    state
        .sessions
        .start_generation(&handle, &mut session, ticket, request);

    Ok((StatusCode::ACCEPTED, respond(id, session.view())))
}

/// POST /api/v1/editor/sessions/{id}/template/cancel
pub async fn cancel_template(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<SessionResponse> {
    let handle = state.sessions.get(id).await?;
    let mut session = handle.lock().await;
    session.touch();
    session.state.cancel_template()?;
    Ok(respond(id, session.view()))
}

// ---------------------------------------------------------------------------
// Editing surface
// ---------------------------------------------------------------------------

/// PUT /api/v1/editor/sessions/{id}/selection
pub async fn select_slide(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SelectSlide>,
) -> AppResult<SessionResponse> {
    let handle = state.sessions.get(id).await?;
    let mut session = handle.lock().await;
    session.touch();

    let command = session.state.select_slide(input.index)?;
    state.sessions.apply_playback(&handle, &mut session, command);
    Ok(respond(id, session.view()))
}

/// POST /api/v1/editor/sessions/{id}/playback/toggle
pub async fn toggle_playback(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<SessionResponse> {
    let handle = state.sessions.get(id).await?;
    let mut session = handle.lock().await;
    session.touch();

    let command = session.state.toggle_playing()?;
    state.sessions.apply_playback(&handle, &mut session, command);
    Ok(respond(id, session.view()))
}

/// PUT /api/v1/editor/sessions/{id}/toolbar
pub async fn update_toolbar(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ToolbarUpdate>,
) -> AppResult<SessionResponse> {
    let handle = state.sessions.get(id).await?;
    let mut session = handle.lock().await;
    session.touch();

    if let Some(settings) = input.settings {
        session.state.update_panel_settings(settings)?;
    }
    if let Some(panel) = input.panel {
        session.state.toggle_tool(panel)?;
    }
    Ok(respond(id, session.view()))
}

/// DELETE /api/v1/editor/sessions/{id}/slides/{index}
///
/// Deletes the slide at the 0-based timeline position from the project and
/// from the session.
pub async fn delete_slide(
    State(state): State<AppState>,
    Path((id, index)): Path<(DbId, usize)>,
) -> AppResult<SessionResponse> {
    let handle = state.sessions.get(id).await?;
    let mut session = handle.lock().await;
    session.touch();

    let slide_id = session.state.slide_at(index)?.id;
    let project_id = session
        .state
        .project_id()
        .ok_or_else(|| CoreError::Conflict("Session has no project yet".to_string()))?;

    if !VideoSlideRepo::delete_and_compact(&state.pool, project_id, slide_id).await? {
        return Err(CoreError::NotFound {
            entity: "VideoSlide",
            id: slide_id,
        }
        .into());
    }
    let (_, command) = session.state.delete_slide(index)?;
    state.sessions.apply_playback(&handle, &mut session, command);

    tracing::info!(session_id = %id, %slide_id, index, "Slide deleted");
    Ok(respond(id, session.view()))
}

/// GET /api/v1/editor/sessions/{id}/progress/stream
///
/// Server-sent events carrying a [`ProgressUpdate`] on every tick, selection
/// change and play/stop. The stream ends when the session closes.
pub async fn progress_stream(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Sse<impl Stream<Item = Result<Event, Infallible>>>> {
    let handle = state.sessions.get(id).await?;
    let receiver = {
        let mut session = handle.lock().await;
        session.touch();
        session.subscribe_progress()
    };

    // The current state first, then every change until the session closes.
    let stream = stream::unfold((receiver, true), |(mut receiver, first)| async move {
        if !first && receiver.changed().await.is_err() {
            return None;
        }
        let update: ProgressUpdate = receiver.borrow_and_update().clone();
        let event = Event::default()
            .event("progress")
            .json_data(&update)
            .unwrap_or_else(|_| Event::default().event("progress").data("{}"));
        Some((Ok::<_, Infallible>(event), (receiver, false)))
    });

    Ok(Sse::new(stream).keep_alive(KeepAlive::new().interval(Duration::from_secs(15))))
}
