//! HTTP-level tests for projects, their slides and render jobs.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post, post_json, put_json};
use newsreel_core::aspect_ratio::AspectRatio;
use newsreel_core::types::DbId;
use newsreel_db::models::video_project::CreateVideoProject;
use newsreel_db::repositories::VideoProjectRepo;
use serde_json::json;
use sqlx::PgPool;

async fn seed_project(pool: &PgPool) -> DbId {
    let input = CreateVideoProject {
        article_id: None,
        title: "Evening Bulletin".to_string(),
        description: None,
        aspect_ratio: AspectRatio::Landscape,
        keywords: vec!["news".to_string()],
        thumbnail_url: None,
    };
    VideoProjectRepo::create(pool, &input).await.unwrap().id
}

/// Append `texts` as slides and return their IDs in order.
async fn seed_slides(pool: &PgPool, project_id: DbId, texts: &[&str]) -> Vec<String> {
    let mut ids = Vec::new();
    for text in texts {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            &format!("/api/v1/projects/{project_id}/slides"),
            json!({"text_content": text}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        ids.push(json["data"]["id"].as_str().unwrap().to_string());
    }
    ids
}

fn texts(json: &serde_json::Value) -> Vec<String> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["text_content"].as_str().unwrap().to_string())
        .collect()
}

fn orders(json: &serde_json::Value) -> Vec<i64> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["slide_order"].as_i64().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_project_reports_defaults(pool: PgPool) {
    let id = seed_project(&pool).await;
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Evening Bulletin");
    assert_eq!(json["data"]["aspect_ratio"], "16:9");
    assert_eq!(json["data"]["fps"], 30);
    assert_eq!(json["data"]["status"], "draft");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_projects(pool: PgPool) {
    seed_project(&pool).await;
    seed_project(&pool).await;
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/projects").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_nonexistent_project_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/projects/{}", uuid::Uuid::new_v4())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_project_changes_only_given_fields(pool: PgPool) {
    let id = seed_project(&pool).await;
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/projects/{id}"),
        json!({"aspect_ratio": "9:16", "fps": 60}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Evening Bulletin");
    assert_eq!(json["data"]["aspect_ratio"], "9:16");
    assert_eq!(json["data"]["fps"], 60);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_project_rejects_blank_title(pool: PgPool) {
    let id = seed_project(&pool).await;
    let app = common::build_test_app(pool);
    let response = put_json(app, &format!("/api/v1/projects/{id}"), json!({"title": "   "})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_project_rejects_unknown_aspect_ratio(pool: PgPool) {
    let id = seed_project(&pool).await;
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/projects/{id}"),
        json!({"aspect_ratio": "4:3"}),
    )
    .await;
    assert!(response.status().is_client_error());
}

// ---------------------------------------------------------------------------
// Slides
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_appended_slides_get_consecutive_orders(pool: PgPool) {
    let project_id = seed_project(&pool).await;
    seed_slides(&pool, project_id, &["One", "Two", "Three"]).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/projects/{project_id}/slides")).await).await;
    assert_eq!(orders(&json), vec![1, 2, 3]);
    assert_eq!(texts(&json), vec!["One", "Two", "Three"]);
    assert_eq!(json["data"][0]["duration"], 5.0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_append_to_missing_project_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/projects/{}/slides", uuid::Uuid::new_v4()),
        json!({"text_content": "Orphan"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_slide_duration_must_be_positive(pool: PgPool) {
    let project_id = seed_project(&pool).await;
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/projects/{project_id}/slides"),
        json!({"text_content": "Frozen", "duration": 0.0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_slide(pool: PgPool) {
    let project_id = seed_project(&pool).await;
    let ids = seed_slides(&pool, project_id, &["Draft"]).await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/projects/{project_id}/slides/{}", ids[0]),
        json!({"text_content": "Final", "duration": 7.5}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["text_content"], "Final");
    assert_eq!(json["data"]["duration"], 7.5);
    assert_eq!(json["data"]["slide_order"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_slide_of_other_project_returns_404(pool: PgPool) {
    let project_a = seed_project(&pool).await;
    let project_b = seed_project(&pool).await;
    let ids = seed_slides(&pool, project_a, &["Mine"]).await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/projects/{project_b}/slides/{}", ids[0]),
        json!({"text_content": "Stolen"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_slide_renumbers_the_rest(pool: PgPool) {
    let project_id = seed_project(&pool).await;
    let ids = seed_slides(&pool, project_id, &["A", "B", "C"]).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/projects/{project_id}/slides/{}", ids[0])).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/projects/{project_id}/slides")).await).await;
    assert_eq!(texts(&json), vec!["B", "C"]);
    assert_eq!(orders(&json), vec![1, 2]);

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/v1/projects/{project_id}/slides/{}", ids[0])).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_reorder_moves_slide_and_shifts_between(pool: PgPool) {
    let project_id = seed_project(&pool).await;
    seed_slides(&pool, project_id, &["A", "B", "C", "D"]).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/projects/{project_id}/slides/reorder"),
        json!({"from": 4, "to": 2}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(texts(&json), vec!["A", "D", "B", "C"]);
    assert_eq!(orders(&json), vec![1, 2, 3, 4]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_reorder_out_of_range_is_rejected(pool: PgPool) {
    let project_id = seed_project(&pool).await;
    seed_slides(&pool, project_id, &["A", "B"]).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/projects/{project_id}/slides/reorder"),
        json!({"from": 1, "to": 3}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Render jobs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_export_queues_render_job(pool: PgPool) {
    let project_id = seed_project(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post(app, &format!("/api/v1/projects/{project_id}/render-jobs")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "queued");
    assert_eq!(json["data"]["progress"], 0);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/projects/{project_id}/render-jobs")).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_export_for_missing_project_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post(
        app,
        &format!("/api/v1/projects/{}/render-jobs", uuid::Uuid::new_v4()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
