//! Playback ticker.
//!
//! One tokio task per playing session fires every tick period and advances
//! the session's progress counter. A ticker is tagged with the playback
//! epoch it was started for; once the session moves to a newer epoch the
//! ticker's ticks are rejected and the task exits.

use std::time::Duration;

use newsreel_core::editor::PlaybackCommand;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use super::session::{EditorSession, SessionRef};

/// Carry out a [`PlaybackCommand`] returned by the editor state.
///
/// `handle` must be the shared handle of `session`; the ticker task locks it
/// on every tick.
pub fn apply(
    handle: &SessionRef,
    session: &mut EditorSession,
    command: PlaybackCommand,
    period: Duration,
) {
    match command {
        PlaybackCommand::Unchanged => return,
        PlaybackCommand::Stop => {
            if let Some(cancel) = session.playback_cancel.take() {
                cancel.cancel();
                tracing::debug!(session_id = %session.id, "Playback stopped");
            }
        }
        PlaybackCommand::Start { epoch } => {
            if let Some(cancel) = session.playback_cancel.take() {
                cancel.cancel();
            }
            let cancel = CancellationToken::new();
            session.playback_cancel = Some(cancel.clone());
            tokio::spawn(run_ticker(handle.clone(), epoch, period, cancel));
            tracing::debug!(
                session_id = %session.id,
                epoch,
                slide_index = session.state.selected_slide_index(),
                "Playback started"
            );
        }
    }
    session.publish_progress(false);
}

async fn run_ticker(handle: SessionRef, epoch: u64, period: Duration, cancel: CancellationToken) {
    let start = tokio::time::Instant::now() + period;
    let mut interval = tokio::time::interval_at(start, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = interval.tick() => {
                let mut session = handle.lock().await;
                match session.state.tick(epoch) {
                    Some(tick) => session.publish_progress(tick.wrapped),
                    // Superseded or stopped without a cancel reaching us first.
                    None => break,
                }
            }
        }
    }
}
