use super::UserQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::errors::Entity,
};

impl UserQueryService {
    /// The token subject may have disappeared since the token was signed.
    pub async fn current_user(&self, actor: &AuthenticatedUser) -> ApplicationResult<UserDto> {
        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or(ApplicationError::NotFound(Entity::User))?;

        let token = self.token_manager.issue(user.id).await?;
        Ok(UserDto::from_parts(user, token))
    }
}
