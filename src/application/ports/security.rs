// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthToken, AuthenticatedUser},
};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Salted one-way hash of `password`.
    async fn hash(&self, password: &str) -> ApplicationResult<String>;

    /// `Ok(false)` on mismatch; `Err` only when the stored hash is unusable.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool>;
}

#[async_trait]
pub trait TokenManager: Send + Sync {
    async fn issue(&self, user_id: UserId) -> ApplicationResult<AuthToken>;

    /// Every rejection is `ApplicationError::Unauthenticated`.
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
}
