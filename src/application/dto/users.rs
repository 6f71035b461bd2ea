use crate::domain::user::User;
use serde::{Deserialize, Serialize};

use super::auth::AuthToken;

/// The authenticated user's own view, carrying a freshly issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub email: String,
    pub token: String,
    pub username: String,
    pub bio: Option<String>,
    pub image: Option<String>,
}

impl UserDto {
    pub fn from_parts(user: User, token: AuthToken) -> Self {
        Self {
            email: user.email.into(),
            token: token.token,
            username: user.username.into(),
            bio: user.bio,
            image: user.image,
        }
    }
}
