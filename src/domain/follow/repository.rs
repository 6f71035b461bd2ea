use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;
use std::collections::HashSet;

/// Directed follower -> followee edges.
#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Creating an existing edge is a no-op.
    async fn insert(&self, follower: UserId, followee: UserId) -> DomainResult<()>;

    /// Removing a missing edge is a no-op.
    async fn delete(&self, follower: UserId, followee: UserId) -> DomainResult<()>;

    async fn exists(&self, follower: UserId, followee: UserId) -> DomainResult<bool>;

    /// Returns the subset of `followees` that `follower` follows, in one
    /// round trip.
    async fn existing(
        &self,
        follower: UserId,
        followees: &[UserId],
    ) -> DomainResult<HashSet<UserId>>;
}
