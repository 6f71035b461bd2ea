use std::sync::Arc;

use crate::application::{
    assembler::ReadModelAssembler,
    dto::{ArticlePageDto, AuthenticatedUser},
    error::ApplicationResult,
};
use crate::domain::article::{ArticleReadRepository, ArticleSlice};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) assembler: Arc<ReadModelAssembler>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        assembler: Arc<ReadModelAssembler>,
    ) -> Self {
        Self {
            read_repo,
            assembler,
        }
    }

    pub(super) async fn page(
        &self,
        viewer: Option<&AuthenticatedUser>,
        slice: ArticleSlice,
    ) -> ApplicationResult<ArticlePageDto> {
        let articles = self
            .assembler
            .articles(AuthenticatedUser::viewer(viewer), slice.articles)
            .await?;
        Ok(ArticlePageDto {
            articles,
            articles_count: slice.total,
        })
    }
}
