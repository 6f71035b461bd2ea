use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationResult, ValidationErrors},
    },
    domain::user::{Email, NewUser, PasswordHash, Username},
};

pub struct RegisterUserCommand {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let mut errors = ValidationErrors::default();
        let username = errors.capture(Username::new(command.username));
        let email = errors.capture(Email::new(command.email));
        let password = errors.capture(validate_password(&command.password));

        let (Some(username), Some(email), Some(password)) = (username, email, password) else {
            return Err(errors.into());
        };

        self.ensure_email_free(&email, None).await?;
        self.ensure_username_free(&username, None).await?;

        let hashed = self.password_hasher.hash(password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let new_user = NewUser::new(email, username, password_hash, self.clock.now());
        let user = self.user_repo.insert(new_user).await?;
        tracing::info!(user_id = %user.id, username = %user.username, "user registered");

        self.with_fresh_token(user).await
    }
}
