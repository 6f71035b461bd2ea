use std::sync::Arc;

use crate::application::{
    assembler::ReadModelAssembler,
    error::{ApplicationError, ApplicationResult},
    ports::time::Clock,
};
use crate::domain::{
    article::{Article, ArticleReadRepository, ArticleSlug},
    comment::CommentRepository,
    errors::Entity,
};

pub struct CommentCommandService {
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) assembler: Arc<ReadModelAssembler>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        article_repo: Arc<dyn ArticleReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        assembler: Arc<ReadModelAssembler>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            article_repo,
            comment_repo,
            assembler,
            clock,
        }
    }

    pub(super) async fn load_article(&self, slug: String) -> ApplicationResult<Article> {
        let slug = ArticleSlug::new(slug).map_err(|_| ApplicationError::NotFound(Entity::Article))?;
        self.article_repo
            .find_by_slug(&slug)
            .await?
            .ok_or(ApplicationError::NotFound(Entity::Article))
    }
}
