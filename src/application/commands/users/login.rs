use super::UserCommandService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, User},
};

pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    /// Unknown email, wrong password and an unreadable stored hash all answer
    /// `InvalidCredentials` so callers cannot probe which accounts exist.
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<UserDto> {
        let Ok(email) = Email::new(command.email) else {
            return Err(ApplicationError::InvalidCredentials);
        };
        let user = self
            .find_and_authenticate_user(&email, &command.password)
            .await?;
        self.with_fresh_token(user).await
    }

    async fn find_and_authenticate_user(
        &self,
        email: &Email,
        password: &str,
    ) -> ApplicationResult<User> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or(ApplicationError::InvalidCredentials)?;

        match self
            .password_hasher
            .verify(password, user.password_hash.as_str())
            .await
        {
            Ok(true) => Ok(user),
            Ok(false) => {
                tracing::debug!(user_id = %user.id, "password mismatch");
                Err(ApplicationError::InvalidCredentials)
            }
            Err(err) => {
                tracing::warn!(user_id = %user.id, error = %err, "stored password hash rejected");
                Err(ApplicationError::InvalidCredentials)
            }
        }
    }
}
