//! Periodic closing of idle editor sessions.
//!
//! Sessions nobody has touched for `SESSION_IDLE_TTL_SECS` are closed and
//! their timers torn down. Runs on a fixed interval using
//! `tokio::time::interval`.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::editor::SessionManager;

/// How often idle sessions are looked for.
const REAP_INTERVAL: Duration = Duration::from_secs(60);

/// Run the reaper loop until `cancel` is triggered.
pub async fn run(sessions: Arc<SessionManager>, cancel: CancellationToken) {
    tracing::info!(
        interval_secs = REAP_INTERVAL.as_secs(),
        idle_ttl_secs = sessions.timings().session_idle_ttl.as_secs(),
        "Session reaper started"
    );

    let mut interval = tokio::time::interval(REAP_INTERVAL);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Session reaper stopping");
                break;
            }
            _ = interval.tick() => {
                let closed = sessions.reap_idle().await;
                if closed > 0 {
                    tracing::info!(closed, "Session reaper: closed idle sessions");
                } else {
                    tracing::debug!("Session reaper: no idle sessions");
                }
            }
        }
    }
}
