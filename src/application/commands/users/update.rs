use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationResult, ValidationErrors},
    },
    domain::user::{Email, PasswordHash, UserUpdate, Username},
};

/// Absent fields stay untouched. `bio` and `image` distinguish "absent"
/// (`None`) from "set to null" (`Some(None)`).
#[derive(Debug, Default)]
pub struct UpdateUserCommand {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub bio: Option<Option<String>>,
    pub image: Option<Option<String>>,
}

impl UpdateUserCommand {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.username.is_none()
            && self.password.is_none()
            && self.bio.is_none()
            && self.image.is_none()
    }
}

impl UserCommandService {
    pub async fn update_user(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateUserCommand,
    ) -> ApplicationResult<UserDto> {
        let current = self.load_actor(actor).await?;
        if command.is_empty() {
            return self.with_fresh_token(current).await;
        }

        let mut errors = ValidationErrors::default();
        let email = command
            .email
            .map(|raw| errors.capture(Email::new(raw)));
        let username = command
            .username
            .map(|raw| errors.capture(Username::new(raw)));
        let password = command
            .password
            .map(|raw| errors.capture(validate_password(&raw).map(str::to_owned)));
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let mut update = UserUpdate::new(current.id, self.clock.now());

        if let Some(email) = email.flatten() {
            if email != current.email {
                self.ensure_email_free(&email, Some(current.id)).await?;
            }
            update = update.with_email(email);
        }

        if let Some(username) = username.flatten() {
            if username != current.username {
                self.ensure_username_free(&username, Some(current.id)).await?;
            }
            update = update.with_username(username);
        }

        if let Some(password) = password.flatten() {
            let hashed = self.password_hasher.hash(&password).await?;
            update = update.with_password_hash(PasswordHash::new(hashed)?);
        }

        if let Some(bio) = command.bio {
            update = update.with_bio(bio);
        }

        if let Some(image) = command.image {
            update = update.with_image(image);
        }

        let user = self.user_repo.update(update).await?;
        tracing::info!(user_id = %user.id, "user updated");
        self.with_fresh_token(user).await
    }
}
