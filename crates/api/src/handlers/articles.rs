//! Handlers for the `/articles` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use newsreel_core::article_search::{editor_link, filter_articles, EMPTY_RESULTS_MESSAGE};
use newsreel_core::error::CoreError;
use newsreel_core::types::DbId;
use newsreel_db::models::article::Article;
use newsreel_db::repositories::ArticleRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// An article card with the link that opens it in the editor.
#[derive(Debug, Serialize)]
pub struct ArticleCard {
    #[serde(flatten)]
    pub article: Article,
    pub editor_link: String,
}

impl From<Article> for ArticleCard {
    fn from(article: Article) -> Self {
        let editor_link = editor_link(article.id);
        Self {
            article,
            editor_link,
        }
    }
}

/// The filtered article list.
#[derive(Debug, Serialize)]
pub struct ArticleListing {
    pub query: String,
    pub articles: Vec<ArticleCard>,
    /// Message shown in place of the list when nothing matches.
    pub empty_state: Option<&'static str>,
}

/// GET /api/v1/articles?q=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<DataResponse<ArticleListing>>> {
    let all = ArticleRepo::list(&state.pool).await?;
    let articles: Vec<ArticleCard> = filter_articles(&all, &params.q)
        .into_iter()
        .cloned()
        .map(ArticleCard::from)
        .collect();

    tracing::debug!(query = %params.q, matches = articles.len(), "Filtered articles");

    let empty_state = articles.is_empty().then_some(EMPTY_RESULTS_MESSAGE);
    Ok(Json(DataResponse {
        data: ArticleListing {
            query: params.q,
            articles,
            empty_state,
        },
    }))
}

/// GET /api/v1/articles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ArticleCard>>> {
    let article = ArticleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Article",
            id,
        })?;
    Ok(Json(DataResponse {
        data: article.into(),
    }))
}
