use crate::domain::user::User;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDto {
    pub username: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub following: bool,
}

impl ProfileDto {
    pub fn from_user(user: &User, following: bool) -> Self {
        Self {
            username: user.username.to_string(),
            bio: user.bio.clone(),
            image: user.image.clone(),
            following,
        }
    }
}
