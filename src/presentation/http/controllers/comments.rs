use crate::application::{
    commands::comments::{CreateCommentCommand, DeleteCommentCommand},
    dto::CommentDto,
    queries::comments::ListCommentsQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CommentEnvelope {
    pub comment: NewCommentRequest,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NewCommentRequest {
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub comment: CommentDto,
}

#[derive(Debug, Serialize)]
pub struct CommentsResponse {
    pub comments: Vec<CommentDto>,
}

pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    viewer: MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<CommentsResponse>> {
    state
        .services
        .comment_queries
        .list_comments(viewer.viewer(), ListCommentsQuery { slug })
        .await
        .into_http()
        .map(|comments| Json(CommentsResponse { comments }))
}

pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(slug): Path<String>,
    Json(payload): Json<CommentEnvelope>,
) -> HttpResult<(StatusCode, Json<CommentResponse>)> {
    let comment = state
        .services
        .comment_commands
        .create_comment(
            &actor,
            CreateCommentCommand {
                slug,
                body: payload.comment.body,
            },
        )
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(CommentResponse { comment })))
}

pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path((slug, id)): Path<(String, i64)>,
) -> HttpResult<StatusCode> {
    state
        .services
        .comment_commands
        .delete_comment(&actor, DeleteCommentCommand { slug, id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
