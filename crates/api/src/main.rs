use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use newsreel_api::background;
use newsreel_api::config::ServerConfig;
use newsreel_api::editor::{PgGenerationBackend, SessionManager};
use newsreel_api::router::build_app_router;
use newsreel_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "newsreel_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        generation_delay_ms = config.editor.generation_delay.as_millis() as u64,
        tick_ms = config.editor.tick_interval.as_millis() as u64,
        "Loaded server configuration"
    );

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = newsreel_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    newsreel_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    newsreel_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Editor sessions ---
    let backend = Arc::new(PgGenerationBackend::new(pool.clone()));
    let sessions = Arc::new(SessionManager::new(config.editor, backend));

    let reaper_cancel = CancellationToken::new();
    let reaper_handle = tokio::spawn(background::session_reaper::run(
        Arc::clone(&sessions),
        reaper_cancel.clone(),
    ));

    // --- App state ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        sessions: Arc::clone(&sessions),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    let shutdown_sessions = Arc::clone(&sessions);
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            // Progress streams only end once their sessions are gone.
            let open = shutdown_sessions.session_count().await;
            tracing::info!(open, "Closing editor sessions");
            shutdown_sessions.shutdown_all().await;
        })
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");
    let cleanup_timeout = Duration::from_secs(config.shutdown_timeout_secs);

    reaper_cancel.cancel();
    let _ = tokio::time::timeout(cleanup_timeout, reaper_handle).await;
    tracing::info!("Session reaper stopped");

    // Sessions opened while connections drained.
    if tokio::time::timeout(cleanup_timeout, sessions.shutdown_all())
        .await
        .is_err()
    {
        tracing::warn!("Timed out closing editor sessions");
    }

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
