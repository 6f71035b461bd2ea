use crate::domain::article::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;
use std::collections::HashSet;

/// user -> article favorite edges.
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Creating an existing edge is a no-op.
    async fn insert(&self, user: UserId, article: ArticleId) -> DomainResult<()>;

    /// Removing a missing edge is a no-op.
    async fn delete(&self, user: UserId, article: ArticleId) -> DomainResult<()>;

    async fn exists(&self, user: UserId, article: ArticleId) -> DomainResult<bool>;

    async fn existing(&self, user: UserId, articles: &[ArticleId])
    -> DomainResult<HashSet<ArticleId>>;

    /// Number of edges pointing at `article`.
    async fn count(&self, article: ArticleId) -> DomainResult<u64>;
}
