use std::time::Duration;

use newsreel_core::playback::TICK_INTERVAL;
use newsreel_core::template_dialog::GENERATION_DELAY;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Graceful shutdown timeout in seconds (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Timers driving the editor sessions.
    pub editor: EditorTimings,
}

/// Durations used by editor sessions.
#[derive(Debug, Clone, Copy)]
pub struct EditorTimings {
    /// Artificial delay before generation runs (default: 2000 ms).
    pub generation_delay: Duration,
    /// Playback tick period (default: 100 ms).
    pub tick_interval: Duration,
    /// Sessions untouched for longer than this are closed (default: 1 h).
    pub session_idle_ttl: Duration,
}

impl Default for EditorTimings {
    fn default() -> Self {
        Self {
            generation_delay: GENERATION_DELAY,
            tick_interval: TICK_INTERVAL,
            session_idle_ttl: Duration::from_secs(3600),
        }
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .unwrap_or_else(|_| panic!("{key} must be a valid u64"))
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                    |
    /// |-------------------------|----------------------------|
    /// | `HOST`                  | `0.0.0.0`                  |
    /// | `PORT`                  | `3000`                     |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `30`                       |
    /// | `GENERATION_DELAY_MS`   | `2000`                     |
    /// | `PLAYBACK_TICK_MS`      | `100`                      |
    /// | `SESSION_IDLE_TTL_SECS` | `3600`                     |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let defaults = EditorTimings::default();
        let tick_ms = env_u64("PLAYBACK_TICK_MS", defaults.tick_interval.as_millis() as u64);
        assert!(tick_ms > 0, "PLAYBACK_TICK_MS must be > 0");

        let editor = EditorTimings {
            generation_delay: Duration::from_millis(env_u64(
                "GENERATION_DELAY_MS",
                defaults.generation_delay.as_millis() as u64,
            )),
            tick_interval: Duration::from_millis(tick_ms),
            session_idle_ttl: Duration::from_secs(env_u64(
                "SESSION_IDLE_TTL_SECS",
                defaults.session_idle_ttl.as_secs(),
            )),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs: env_u64("REQUEST_TIMEOUT_SECS", 30),
            shutdown_timeout_secs: env_u64("SHUTDOWN_TIMEOUT_SECS", 30),
            editor,
        }
    }
}
