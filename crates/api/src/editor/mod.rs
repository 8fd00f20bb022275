//! Live editor sessions.
//!
//! The pure state machine lives in `newsreel_core::editor`; this module owns
//! the sessions, the playback ticker and the delayed generation task that
//! drive it on tokio.

pub mod generation;
pub mod manager;
pub mod playback;
pub mod session;

pub use generation::{GenerationBackend, GenerationRequest, PgGenerationBackend};
pub use manager::SessionManager;
pub use session::{EditorSession, ProgressUpdate, SessionRef};
