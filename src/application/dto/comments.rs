use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{profiles::ProfileDto, serde_time};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i64,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
    pub body: String,
    pub author: ProfileDto,
}

impl CommentDto {
    pub fn from_parts(comment: Comment, author: ProfileDto) -> Self {
        Self {
            id: comment.id.into(),
            created_at: comment.created_at,
            updated_at: comment.updated_at,
            body: comment.body.into(),
            author,
        }
    }
}
