use std::sync::Arc;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::{
    errors::Entity,
    follow::FollowService,
    user::{User, UserRepository, Username},
};

pub struct ProfileCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) follows: Arc<FollowService>,
}

impl ProfileCommandService {
    pub fn new(user_repo: Arc<dyn UserRepository>, follows: Arc<FollowService>) -> Self {
        Self { user_repo, follows }
    }

    pub(super) async fn resolve(&self, username: String) -> ApplicationResult<User> {
        let username =
            Username::new(username).map_err(|_| ApplicationError::NotFound(Entity::Profile))?;
        self.user_repo
            .find_by_username(&username)
            .await?
            .ok_or(ApplicationError::NotFound(Entity::Profile))
    }
}
