use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, TagName};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Conjunctive list filters. `None` leaves a dimension unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub tag: Option<String>,
    pub author: Option<String>,
    pub favorited_by: Option<String>,
}

/// Already-clamped pagination window handed to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: u32,
    pub offset: u64,
}

/// One page of articles plus the number of rows matching the filter before
/// pagination.
#[derive(Debug, Clone)]
pub struct ArticleSlice {
    pub articles: Vec<Article>,
    pub total: u64,
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Inserts the article, get-or-creates its tags and links them, all in one
    /// transaction. A taken slug is reported as `Conflict { field: "slug" }`.
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;

    /// Removes the article; tag links, favorites and comments cascade.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;

    /// Newest first.
    async fn list(&self, filter: &ArticleFilter, window: PageWindow)
    -> DomainResult<ArticleSlice>;

    /// Articles written by anyone `follower` follows, newest first.
    async fn feed(&self, follower: UserId, window: PageWindow) -> DomainResult<ArticleSlice>;

    /// Every known tag, sorted by name.
    async fn list_tags(&self) -> DomainResult<Vec<TagName>>;
}
