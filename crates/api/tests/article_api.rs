//! HTTP-level tests for the article list and the read-only catalogs.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Article search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_empty_query_lists_every_article_newest_first(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/articles").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let articles = json["data"]["articles"].as_array().unwrap();
    assert_eq!(articles.len(), 4);
    assert_eq!(
        articles[0]["title"],
        "Breaking: Tech Giant Announces Revolutionary AI Platform"
    );
    assert!(json["data"]["empty_state"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_query_matches_category_case_insensitively(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/articles?q=SPORTS").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["query"], "SPORTS");
    let articles = json["data"]["articles"].as_array().unwrap();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0]["category"], "Sports");

    let id = articles[0]["id"].as_str().unwrap();
    assert_eq!(
        articles[0]["editor_link"],
        format!("/editor?article={id}")
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_query_matches_author(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/articles?q=martinez").await;

    let json = body_json(response).await;
    let articles = json["data"]["articles"].as_array().unwrap();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0]["author"], "David Martinez");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_no_match_reports_empty_state(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/articles?q=zzzz-nothing").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["data"]["articles"].as_array().unwrap().is_empty());
    assert_eq!(json["data"]["empty_state"], "No articles found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_article_by_id(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let list = body_json(get(app, "/api/v1/articles?q=climate").await).await;
    let id = list["data"]["articles"][0]["id"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/articles/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], id.as_str());
    assert_eq!(json["data"]["title"], "Climate Summit Reaches Historic Agreement");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_unknown_article_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!("/api/v1/articles/{}", uuid::Uuid::new_v4()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_malformed_article_id_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/articles/not-a-uuid").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Catalogs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_template_catalog(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/templates").await).await;

    let templates = json["data"].as_array().unwrap();
    assert_eq!(templates.len(), 4);
    assert!(templates.iter().any(|t| t["name"] == "Dynamic Sports"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_theme_catalog_lists_default_first(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/themes").await).await;

    let themes = json["data"].as_array().unwrap();
    assert_eq!(themes.len(), 3);
    assert_eq!(themes[0]["is_default"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_audio_track_catalog(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/audio-tracks").await).await;

    let tracks = json["data"].as_array().unwrap();
    assert_eq!(tracks.len(), 3);
    assert!(tracks
        .iter()
        .any(|t| t["name"] == "Upbeat Energy" && t["is_premium"] == true));
}
