// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        assembler::ReadModelAssembler,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        article::{
            Article, ArticleReadRepository, ArticleSlug, ArticleWriteRepository,
            services::ArticleSlugService,
        },
        errors::Entity,
        favorite::FavoriteService,
    },
};

/// Inserts that lose a slug race are retried with a fresh probe this many
/// times in total before the conflict is reported.
pub const MAX_INSERT_ATTEMPTS: u32 = 3;

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) favorites: Arc<FavoriteService>,
    pub(super) assembler: Arc<ReadModelAssembler>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        slug_service: Arc<ArticleSlugService>,
        favorites: Arc<FavoriteService>,
        assembler: Arc<ReadModelAssembler>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            favorites,
            assembler,
            clock,
        }
    }

    pub(super) async fn load_by_slug(&self, slug: String) -> ApplicationResult<Article> {
        let slug = ArticleSlug::new(slug).map_err(|_| ApplicationError::NotFound(Entity::Article))?;
        self.read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or(ApplicationError::NotFound(Entity::Article))
    }
}

pub(super) fn ensure_author(actor: &AuthenticatedUser, article: &Article) -> ApplicationResult<()> {
    if article.is_authored_by(actor.id) {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(
            "only the author may modify this article",
        ))
    }
}
