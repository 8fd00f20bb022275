//! Repository for the `video_slides` table.
//!
//! Every write that touches `slide_order` runs in a transaction holding a
//! row lock on the parent project, so concurrent edits of one project
//! serialize and the orders stay contiguous `1..=N`.

use newsreel_core::slide::{DraftSlide, DEFAULT_SLIDE_DURATION_SECS};
use newsreel_core::slide_order::next_slide_order;
use newsreel_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::video_slide::{CreateVideoSlide, UpdateVideoSlide, VideoSlide};

const COLUMNS: &str = "id, project_id, slide_order, text_content, image_url, duration, \
                       animation_effect, transition_type, background_color, text_style, \
                       created_at, updated_at";

pub struct VideoSlideRepo;

/// Lock the project row and return its current slide count, or `None` if the
/// project does not exist.
async fn lock_project(
    tx: &mut Transaction<'_, Postgres>,
    project_id: DbId,
) -> Result<Option<usize>, sqlx::Error> {
    let locked: Option<(DbId,)> =
        sqlx::query_as("SELECT id FROM video_projects WHERE id = $1 FOR UPDATE")
            .bind(project_id)
            .fetch_optional(&mut **tx)
            .await?;
    if locked.is_none() {
        return Ok(None);
    }

    let (count,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM video_slides WHERE project_id = $1")
            .bind(project_id)
            .fetch_one(&mut **tx)
            .await?;
    Ok(Some(count as usize))
}

async fn list_in_tx(
    tx: &mut Transaction<'_, Postgres>,
    project_id: DbId,
) -> Result<Vec<VideoSlide>, sqlx::Error> {
    let query =
        format!("SELECT {COLUMNS} FROM video_slides WHERE project_id = $1 ORDER BY slide_order");
    sqlx::query_as::<_, VideoSlide>(&query)
        .bind(project_id)
        .fetch_all(&mut **tx)
        .await
}

impl VideoSlideRepo {
    /// List a project's slides in order.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<VideoSlide>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM video_slides WHERE project_id = $1 ORDER BY slide_order"
        );
        sqlx::query_as::<_, VideoSlide>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Find a slide by ID, scoped to its project.
    pub async fn find_by_id(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
    ) -> Result<Option<VideoSlide>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM video_slides WHERE id = $1 AND project_id = $2");
        sqlx::query_as::<_, VideoSlide>(&query)
            .bind(id)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn count_by_project(pool: &PgPool, project_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM video_slides WHERE project_id = $1")
                .bind(project_id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    /// Append a slide at the end of the project.
    ///
    /// Returns `None` if the project does not exist.
    pub async fn append(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateVideoSlide,
    ) -> Result<Option<VideoSlide>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let Some(count) = lock_project(&mut tx, project_id).await? else {
            return Ok(None);
        };

        let query = format!(
            "INSERT INTO video_slides
                (project_id, slide_order, text_content, image_url, duration,
                 animation_effect, transition_type, background_color, text_style)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, '{{}}'::jsonb))
             RETURNING {COLUMNS}"
        );
        let slide = sqlx::query_as::<_, VideoSlide>(&query)
            .bind(project_id)
            .bind(next_slide_order(count))
            .bind(&input.text_content)
            .bind(&input.image_url)
            .bind(input.duration.unwrap_or(DEFAULT_SLIDE_DURATION_SECS))
            .bind(&input.animation_effect)
            .bind(&input.transition_type)
            .bind(&input.background_color)
            .bind(&input.text_style)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(slide))
    }

    /// Insert drafted slides into a project that has none yet.
    ///
    /// If the project already has slides they are returned unchanged and no
    /// drafts are written. Returns `None` if the project does not exist.
    pub async fn insert_drafts(
        pool: &PgPool,
        project_id: DbId,
        drafts: &[DraftSlide],
    ) -> Result<Option<Vec<VideoSlide>>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let Some(count) = lock_project(&mut tx, project_id).await? else {
            return Ok(None);
        };

        if count == 0 {
            for draft in drafts {
                sqlx::query(
                    "INSERT INTO video_slides (project_id, slide_order, text_content, image_url, duration)
                     VALUES ($1, $2, $3, $4, $5)",
                )
                .bind(project_id)
                .bind(draft.slide_order)
                .bind(&draft.text_content)
                .bind(&draft.image_url)
                .bind(draft.duration_secs)
                .execute(&mut *tx)
                .await?;
            }
            tracing::debug!(%project_id, count = drafts.len(), "Inserted draft slides");
        }

        let slides = list_in_tx(&mut tx, project_id).await?;
        tx.commit().await?;
        Ok(Some(slides))
    }

    /// Update a slide's content. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
        input: &UpdateVideoSlide,
    ) -> Result<Option<VideoSlide>, sqlx::Error> {
        let query = format!(
            "UPDATE video_slides SET
                text_content = COALESCE($3, text_content),
                image_url = COALESCE($4, image_url),
                duration = COALESCE($5, duration),
                animation_effect = COALESCE($6, animation_effect),
                transition_type = COALESCE($7, transition_type),
                background_color = COALESCE($8, background_color),
                text_style = COALESCE($9, text_style)
             WHERE id = $1 AND project_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VideoSlide>(&query)
            .bind(id)
            .bind(project_id)
            .bind(&input.text_content)
            .bind(&input.image_url)
            .bind(input.duration)
            .bind(&input.animation_effect)
            .bind(&input.transition_type)
            .bind(&input.background_color)
            .bind(&input.text_style)
            .fetch_optional(pool)
            .await
    }

    /// Delete a slide and close the gap it leaves in `slide_order`.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete_and_compact(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        if lock_project(&mut tx, project_id).await?.is_none() {
            return Ok(false);
        }

        let removed: Option<(i32,)> = sqlx::query_as(
            "DELETE FROM video_slides WHERE id = $1 AND project_id = $2 RETURNING slide_order",
        )
        .bind(id)
        .bind(project_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some((order,)) = removed else {
            return Ok(false);
        };

        sqlx::query(
            "UPDATE video_slides SET slide_order = slide_order - 1
             WHERE project_id = $1 AND slide_order > $2",
        )
        .bind(project_id)
        .bind(order)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(true)
    }

    /// Move the slide at order `from` to order `to`, shifting the slides in
    /// between by one. Returns the reordered list.
    ///
    /// Returns `None` if the project does not exist or either order is out of
    /// range at the time the move runs.
    pub async fn move_slide(
        pool: &PgPool,
        project_id: DbId,
        from: i32,
        to: i32,
    ) -> Result<Option<Vec<VideoSlide>>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let Some(count) = lock_project(&mut tx, project_id).await? else {
            return Ok(None);
        };
        let in_range = |order: i32| order >= 1 && order as usize <= count;
        if !in_range(from) || !in_range(to) {
            return Ok(None);
        }

        sqlx::query(
            "UPDATE video_slides SET slide_order = CASE
                WHEN slide_order = $2 THEN $3
                WHEN $2 < $3 AND slide_order > $2 AND slide_order <= $3 THEN slide_order - 1
                WHEN $2 > $3 AND slide_order >= $3 AND slide_order < $2 THEN slide_order + 1
                ELSE slide_order
             END
             WHERE project_id = $1",
        )
        .bind(project_id)
        .bind(from)
        .bind(to)
        .execute(&mut *tx)
        .await?;

        let slides = list_in_tx(&mut tx, project_id).await?;
        tx.commit().await?;
        Ok(Some(slides))
    }
}
