//! Repository for the `audio_tracks` table.

use sqlx::PgPool;

use crate::models::audio_track::AudioTrack;

const COLUMNS: &str = "id, name, category, duration, url, is_premium, created_at";

pub struct AudioTrackRepo;

impl AudioTrackRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<AudioTrack>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM audio_tracks ORDER BY created_at, name");
        sqlx::query_as::<_, AudioTrack>(&query).fetch_all(pool).await
    }
}
