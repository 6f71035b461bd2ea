use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{profiles::ProfileDto, serde_time};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
    pub favorited: bool,
    pub favorites_count: u64,
    pub author: ProfileDto,
}

impl ArticleDto {
    pub fn from_parts(article: Article, author: ProfileDto, favorited: bool) -> Self {
        Self {
            tag_list: article.tag_list.to_strings(),
            slug: article.slug.into(),
            title: article.title.into(),
            description: article.description.into(),
            body: article.body.into(),
            created_at: article.created_at,
            updated_at: article.updated_at,
            favorited,
            favorites_count: article.favorites_count,
            author,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePageDto {
    pub articles: Vec<ArticleDto>,
    /// Matches before pagination.
    pub articles_count: u64,
}
