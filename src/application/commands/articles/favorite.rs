// src/application/commands/articles/favorite.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::{article::Article, favorite::FavoriteState},
};

pub struct FavoriteArticleCommand {
    pub slug: String,
}

impl ArticleCommandService {
    /// Idempotent; the count in the response is read back from the edges.
    pub async fn favorite_article(
        &self,
        actor: &AuthenticatedUser,
        command: FavoriteArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let article = self.load_by_slug(command.slug).await?;
        let state = self.favorites.create(actor.id, article.id).await?;
        self.respond(actor, article, state).await
    }

    pub async fn unfavorite_article(
        &self,
        actor: &AuthenticatedUser,
        command: FavoriteArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let article = self.load_by_slug(command.slug).await?;
        let state = self.favorites.remove(actor.id, article.id).await?;
        self.respond(actor, article, state).await
    }

    async fn respond(
        &self,
        actor: &AuthenticatedUser,
        mut article: Article,
        state: FavoriteState,
    ) -> ApplicationResult<ArticleDto> {
        article.favorites_count = state.favorites_count;
        self.assembler
            .article_with_favorited(Some(actor.id), article, state.favorited)
            .await
    }
}
