use super::CommentCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::ApplicationResult,
    },
    domain::comment::{CommentBody, NewComment},
};

pub struct CreateCommentCommand {
    pub slug: String,
    pub body: String,
}

impl CommentCommandService {
    pub async fn create_comment(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let body = CommentBody::new(command.body)?;
        let article = self.load_article(command.slug).await?;

        let comment = self
            .comment_repo
            .insert(NewComment {
                body,
                article_id: article.id,
                author_id: actor.id,
                created_at: self.clock.now(),
            })
            .await?;

        self.assembler.comment(Some(actor.id), comment).await
    }
}
