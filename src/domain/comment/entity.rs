use crate::domain::article::ArticleId;
use crate::domain::comment::value_objects::{CommentBody, CommentId};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub body: CommentBody,
    pub article_id: ArticleId,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }

    pub fn belongs_to(&self, article_id: ArticleId) -> bool {
        self.article_id == article_id
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub body: CommentBody,
    pub article_id: ArticleId,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}
