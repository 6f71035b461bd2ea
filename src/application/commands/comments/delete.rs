use super::CommentCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{comment::CommentId, errors::Entity},
};

pub struct DeleteCommentCommand {
    pub slug: String,
    pub id: i64,
}

impl CommentCommandService {
    /// Checks run article, then comment, then ownership. A comment filed
    /// under another article is reported as missing.
    pub async fn delete_comment(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCommentCommand,
    ) -> ApplicationResult<()> {
        let article = self.load_article(command.slug).await?;

        let id = CommentId::new(command.id).map_err(|_| ApplicationError::NotFound(Entity::Comment))?;
        let comment = self
            .comment_repo
            .find_by_id(id)
            .await?
            .filter(|comment| comment.belongs_to(article.id))
            .ok_or(ApplicationError::NotFound(Entity::Comment))?;

        if !comment.is_authored_by(actor.id) {
            return Err(ApplicationError::forbidden(
                "only the author may delete this comment",
            ));
        }

        self.comment_repo.delete(comment.id).await?;
        Ok(())
    }
}
