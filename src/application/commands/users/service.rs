use std::sync::Arc;

use crate::application::{
    dto::{AuthenticatedUser, UserDto},
    error::{ApplicationError, ApplicationResult},
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
};
use crate::domain::{
    errors::Entity,
    user::{Email, User, UserId, UserRepository, Username},
};

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            token_manager,
            clock,
        }
    }

    pub(super) async fn with_fresh_token(&self, user: User) -> ApplicationResult<UserDto> {
        let token = self.token_manager.issue(user.id).await?;
        Ok(UserDto::from_parts(user, token))
    }

    pub(super) async fn load_actor(&self, actor: &AuthenticatedUser) -> ApplicationResult<User> {
        self.user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or(ApplicationError::NotFound(Entity::User))
    }

    /// Advisory uniqueness check. The store constraint remains the authority,
    /// a concurrent writer still surfaces as `Conflict` from the repository.
    pub(super) async fn ensure_email_free(
        &self,
        email: &Email,
        owner: Option<UserId>,
    ) -> ApplicationResult<()> {
        match self.user_repo.find_by_email(email).await? {
            Some(existing) if Some(existing.id) != owner => {
                Err(ApplicationError::Conflict { field: "email" })
            }
            _ => Ok(()),
        }
    }

    pub(super) async fn ensure_username_free(
        &self,
        username: &Username,
        owner: Option<UserId>,
    ) -> ApplicationResult<()> {
        match self.user_repo.find_by_username(username).await? {
            Some(existing) if Some(existing.id) != owner => {
                Err(ApplicationError::Conflict { field: "username" })
            }
            _ => Ok(()),
        }
    }
}
