use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::follow::repository::FollowRepository;
use crate::domain::user::UserId;

/// Edge rules for the follow graph: idempotent mutation, no self-follow, and
/// "no viewer" answered without touching the store.
pub struct FollowService {
    repo: Arc<dyn FollowRepository>,
}

impl FollowService {
    pub fn new(repo: Arc<dyn FollowRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, follower: UserId, followee: UserId) -> DomainResult<()> {
        if follower == followee {
            return Err(DomainError::validation("profile", "cannot follow yourself"));
        }
        self.repo.insert(follower, followee).await
    }

    pub async fn remove(&self, follower: UserId, followee: UserId) -> DomainResult<()> {
        self.repo.delete(follower, followee).await
    }

    pub async fn exists(&self, follower: Option<UserId>, followee: UserId) -> DomainResult<bool> {
        match follower {
            Some(follower) => self.repo.exists(follower, followee).await,
            None => Ok(false),
        }
    }

    pub async fn exists_bulk(
        &self,
        follower: Option<UserId>,
        followees: &[UserId],
    ) -> DomainResult<HashSet<UserId>> {
        match follower {
            Some(follower) if !followees.is_empty() => {
                self.repo.existing(follower, followees).await
            }
            _ => Ok(HashSet::new()),
        }
    }
}
