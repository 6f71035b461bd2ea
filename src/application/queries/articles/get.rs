use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::ArticleSlug, errors::Entity},
};

pub struct GetArticleQuery {
    pub slug: String,
}

impl ArticleQueryService {
    pub async fn get_article(
        &self,
        viewer: Option<&AuthenticatedUser>,
        query: GetArticleQuery,
    ) -> ApplicationResult<ArticleDto> {
        let slug = ArticleSlug::new(query.slug)
            .map_err(|_| ApplicationError::NotFound(Entity::Article))?;
        let article = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or(ApplicationError::NotFound(Entity::Article))?;

        self.assembler
            .article(AuthenticatedUser::viewer(viewer), article)
            .await
    }
}
