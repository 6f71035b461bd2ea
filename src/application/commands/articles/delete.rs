// src/application/commands/articles/delete.rs
use super::{ArticleCommandService, service::ensure_author};
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};

pub struct DeleteArticleCommand {
    pub slug: String,
}

impl ArticleCommandService {
    /// Tag links, favorites and comments go with the article.
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let article = self.load_by_slug(command.slug).await?;
        ensure_author(actor, &article)?;

        self.write_repo.delete(article.id).await?;
        tracing::info!(slug = %article.slug, author_id = %actor.id, "article deleted");
        Ok(())
    }
}
