use std::sync::Arc;

use crate::application::{
    assembler::ReadModelAssembler,
    dto::{AuthenticatedUser, ProfileDto},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::{
    errors::Entity,
    user::{UserRepository, Username},
};

pub struct GetProfileQuery {
    pub username: String,
}

pub struct ProfileQueryService {
    user_repo: Arc<dyn UserRepository>,
    assembler: Arc<ReadModelAssembler>,
}

impl ProfileQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>, assembler: Arc<ReadModelAssembler>) -> Self {
        Self {
            user_repo,
            assembler,
        }
    }

    pub async fn get_profile(
        &self,
        viewer: Option<&AuthenticatedUser>,
        query: GetProfileQuery,
    ) -> ApplicationResult<ProfileDto> {
        let username = Username::new(query.username)
            .map_err(|_| ApplicationError::NotFound(Entity::Profile))?;
        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or(ApplicationError::NotFound(Entity::Profile))?;

        self.assembler
            .profile(AuthenticatedUser::viewer(viewer), &user)
            .await
    }
}
