// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleBody, ArticleDescription, ArticleId, ArticleSlug, ArticleTitle, TagList,
};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub slug: ArticleSlug,
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub body: ArticleBody,
    pub tag_list: TagList,
    pub author_id: UserId,
    /// Number of favorite edges, computed from the edge table on read.
    pub favorites_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub slug: ArticleSlug,
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub body: ArticleBody,
    pub tag_list: TagList,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub slug: Option<ArticleSlug>,
    pub title: Option<ArticleTitle>,
    pub description: Option<ArticleDescription>,
    pub body: Option<ArticleBody>,
    pub tag_list: Option<TagList>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            slug: None,
            title: None,
            description: None,
            body: None,
            tag_list: None,
            updated_at,
        }
    }

    pub fn with_slug(mut self, slug: ArticleSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_description(mut self, description: ArticleDescription) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_body(mut self, body: ArticleBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_tag_list(mut self, tag_list: TagList) -> Self {
        self.tag_list = Some(tag_list);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.slug.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.body.is_none()
            && self.tag_list.is_none()
    }

    pub fn apply_to(&self, article: &mut Article) {
        if let Some(slug) = &self.slug {
            article.slug = slug.clone();
        }
        if let Some(title) = &self.title {
            article.title = title.clone();
        }
        if let Some(description) = &self.description {
            article.description = description.clone();
        }
        if let Some(body) = &self.body {
            article.body = body.clone();
        }
        if let Some(tags) = &self.tag_list {
            article.tag_list = tags.clone();
        }
        article.updated_at = self.updated_at;
    }
}
