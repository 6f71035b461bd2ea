use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::comment::{Comment, CommentBody, CommentId, CommentRepository, NewComment};
use crate::domain::errors::{DomainError, DomainResult, Entity};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    body: String,
    article_id: i64,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            body: CommentBody::new(row.body)?,
            article_id: ArticleId::new(row.article_id)?,
            author_id: UserId::new(row.author_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    #[tracing::instrument(skip_all, fields(article_id = comment.article_id.0))]
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (body, article_id, author_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $4)
             RETURNING id, body, article_id, author_id, created_at, updated_at",
        )
        .bind(comment.body.as_str())
        .bind(i64::from(comment.article_id))
        .bind(i64::from(comment.author_id))
        .bind(comment.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx("comments.insert"))?;

        Comment::try_from(row)
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(
            "SELECT id, body, article_id, author_id, created_at, updated_at
             FROM comments WHERE id = $1",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx("comments.find_by_id"))?;

        row.map(Comment::try_from).transpose()
    }

    #[tracing::instrument(skip(self), fields(article_id = article_id.0))]
    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT id, body, article_id, author_id, created_at, updated_at
             FROM comments WHERE article_id = $1
             ORDER BY created_at DESC, id DESC",
        )
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx("comments.list_by_article"))?;

        rows.into_iter().map(Comment::try_from).collect()
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx("comments.delete"))?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(Entity::Comment));
        }
        Ok(())
    }
}
