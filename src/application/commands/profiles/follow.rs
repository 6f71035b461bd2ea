use super::ProfileCommandService;
use crate::application::{
    dto::{AuthenticatedUser, ProfileDto},
    error::ApplicationResult,
};

pub struct FollowUserCommand {
    pub username: String,
}

impl ProfileCommandService {
    /// Following twice is a no-op; following yourself is a validation error.
    pub async fn follow_user(
        &self,
        actor: &AuthenticatedUser,
        command: FollowUserCommand,
    ) -> ApplicationResult<ProfileDto> {
        let target = self.resolve(command.username).await?;
        self.follows.create(actor.id, target.id).await?;
        tracing::debug!(follower = %actor.id, followee = %target.id, "follow edge created");
        Ok(ProfileDto::from_user(&target, true))
    }

    pub async fn unfollow_user(
        &self,
        actor: &AuthenticatedUser,
        command: FollowUserCommand,
    ) -> ApplicationResult<ProfileDto> {
        let target = self.resolve(command.username).await?;
        self.follows.remove(actor.id, target.id).await?;
        Ok(ProfileDto::from_user(&target, false))
    }
}
