use super::ArticleQueryService;
use crate::application::{
    dto::{ArticlePageDto, AuthenticatedUser, PageRequest},
    error::ApplicationResult,
};

#[derive(Debug, Default)]
pub struct FeedQuery {
    pub page: PageRequest,
}

impl ArticleQueryService {
    /// Articles from followed authors only, paged like `list_articles`.
    pub async fn feed(
        &self,
        actor: &AuthenticatedUser,
        query: FeedQuery,
    ) -> ApplicationResult<ArticlePageDto> {
        let slice = self.read_repo.feed(actor.id, query.page.window()).await?;
        self.page(Some(actor), slice).await
    }
}
