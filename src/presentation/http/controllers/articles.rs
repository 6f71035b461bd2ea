// src/presentation/http/controllers/articles.rs
use super::lenient_int;
use crate::application::{
    commands::articles::{
        CreateArticleCommand, DeleteArticleCommand, FavoriteArticleCommand, UpdateArticleCommand,
    },
    dto::{ArticleDto, ArticlePageDto, PageRequest},
    queries::articles::{FeedQuery, GetArticleQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct ArticleListParams {
    pub tag: Option<String>,
    pub author: Option<String>,
    pub favorited: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl ArticleListParams {
    fn page(&self) -> PageRequest {
        PageRequest::new(
            lenient_int(self.limit.as_deref()),
            lenient_int(self.offset.as_deref()),
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct ArticleEnvelope<T> {
    pub article: T,
}

#[derive(Debug, Serialize)]
pub struct ArticleResponse {
    pub article: ArticleDto,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateArticleRequest {
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
    pub tag_list: Option<Vec<String>>,
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    viewer: MaybeAuthenticated,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<ArticlePageDto>> {
    let page = params.page();
    let query = ListArticlesQuery {
        tag: params.tag,
        author: params.author,
        favorited: params.favorited,
        page,
    };

    state
        .services
        .article_queries
        .list_articles(viewer.viewer(), query)
        .await
        .into_http()
        .map(Json)
}

pub async fn feed(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<ArticlePageDto>> {
    state
        .services
        .article_queries
        .feed(&actor, FeedQuery { page: params.page() })
        .await
        .into_http()
        .map(Json)
}

pub async fn get_article(
    Extension(state): Extension<HttpState>,
    viewer: MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleResponse>> {
    state
        .services
        .article_queries
        .get_article(viewer.viewer(), GetArticleQuery { slug })
        .await
        .into_http()
        .map(|article| Json(ArticleResponse { article }))
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Json(payload): Json<ArticleEnvelope<CreateArticleRequest>>,
) -> HttpResult<(StatusCode, Json<ArticleResponse>)> {
    let CreateArticleRequest {
        title,
        description,
        body,
        tag_list,
    } = payload.article;

    let article = state
        .services
        .article_commands
        .create_article(
            &actor,
            CreateArticleCommand {
                title,
                description,
                body,
                tag_list,
            },
        )
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(ArticleResponse { article })))
}

pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(slug): Path<String>,
    Json(payload): Json<ArticleEnvelope<UpdateArticleRequest>>,
) -> HttpResult<Json<ArticleResponse>> {
    let UpdateArticleRequest {
        title,
        description,
        body,
        tag_list,
    } = payload.article;

    let command = UpdateArticleCommand {
        slug,
        title,
        description,
        body,
        tag_list,
    };

    state
        .services
        .article_commands
        .update_article(&actor, command)
        .await
        .into_http()
        .map(|article| Json(ArticleResponse { article }))
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(&actor, DeleteArticleCommand { slug })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn favorite(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleResponse>> {
    state
        .services
        .article_commands
        .favorite_article(&actor, FavoriteArticleCommand { slug })
        .await
        .into_http()
        .map(|article| Json(ArticleResponse { article }))
}

pub async fn unfavorite(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleResponse>> {
    state
        .services
        .article_commands
        .unfavorite_article(&actor, FavoriteArticleCommand { slug })
        .await
        .into_http()
        .map(|article| Json(ArticleResponse { article }))
}
