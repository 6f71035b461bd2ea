use std::sync::Arc;

use crate::application::{
    assembler::ReadModelAssembler,
    dto::{AuthenticatedUser, CommentDto},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::{
    article::{ArticleReadRepository, ArticleSlug},
    comment::CommentRepository,
    errors::Entity,
};

pub struct ListCommentsQuery {
    pub slug: String,
}

pub struct CommentQueryService {
    article_repo: Arc<dyn ArticleReadRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    assembler: Arc<ReadModelAssembler>,
}

impl CommentQueryService {
    pub fn new(
        article_repo: Arc<dyn ArticleReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        assembler: Arc<ReadModelAssembler>,
    ) -> Self {
        Self {
            article_repo,
            comment_repo,
            assembler,
        }
    }

    /// Newest first, authors hydrated in bulk.
    pub async fn list_comments(
        &self,
        viewer: Option<&AuthenticatedUser>,
        query: ListCommentsQuery,
    ) -> ApplicationResult<Vec<CommentDto>> {
        let slug = ArticleSlug::new(query.slug)
            .map_err(|_| ApplicationError::NotFound(Entity::Article))?;
        let article = self
            .article_repo
            .find_by_slug(&slug)
            .await?
            .ok_or(ApplicationError::NotFound(Entity::Article))?;

        let comments = self.comment_repo.list_by_article(article.id).await?;
        self.assembler
            .comments(AuthenticatedUser::viewer(viewer), comments)
            .await
    }
}
