// src/application/assembler.rs
use std::collections::HashMap;
use std::sync::Arc;

use crate::application::{
    dto::{ArticleDto, CommentDto, ProfileDto},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::{
    article::{Article, ArticleId},
    comment::Comment,
    errors::Entity,
    favorite::FavoriteService,
    follow::FollowService,
    user::{User, UserId, UserRepository},
};

/// Turns stored rows into viewer-relative read models. Lists are hydrated
/// with a fixed number of round trips: one for authors, one for follow
/// state and, for articles, one for favorite state.
pub struct ReadModelAssembler {
    user_repo: Arc<dyn UserRepository>,
    follows: Arc<FollowService>,
    favorites: Arc<FavoriteService>,
}

impl ReadModelAssembler {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        follows: Arc<FollowService>,
        favorites: Arc<FavoriteService>,
    ) -> Self {
        Self {
            user_repo,
            follows,
            favorites,
        }
    }

    pub async fn profile(&self, viewer: Option<UserId>, user: &User) -> ApplicationResult<ProfileDto> {
        let following = self.follows.exists(viewer, user.id).await?;
        Ok(ProfileDto::from_user(user, following))
    }

    pub async fn article(
        &self,
        viewer: Option<UserId>,
        article: Article,
    ) -> ApplicationResult<ArticleDto> {
        let favorited = self.favorites.exists(viewer, article.id).await?;
        self.article_with_favorited(viewer, article, favorited).await
    }

    /// Used right after a favorite mutation, when the edge state is already
    /// known and need not be read back.
    pub async fn article_with_favorited(
        &self,
        viewer: Option<UserId>,
        article: Article,
        favorited: bool,
    ) -> ApplicationResult<ArticleDto> {
        let author = self.load_author(article.author_id).await?;
        let author = self.profile(viewer, &author).await?;
        Ok(ArticleDto::from_parts(article, author, favorited))
    }

    pub async fn articles(
        &self,
        viewer: Option<UserId>,
        articles: Vec<Article>,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        if articles.is_empty() {
            return Ok(Vec::new());
        }

        let author_ids: Vec<UserId> = articles.iter().map(|a| a.author_id).collect();
        let profiles = self.profiles_by_id(viewer, &author_ids).await?;

        let article_ids: Vec<ArticleId> = articles.iter().map(|a| a.id).collect();
        let favorited = self.favorites.exists_bulk(viewer, &article_ids).await?;

        articles
            .into_iter()
            .map(|article| {
                let author = profiles
                    .get(&article.author_id)
                    .cloned()
                    .ok_or_else(|| dangling_author(article.author_id))?;
                let is_favorited = favorited.contains(&article.id);
                Ok(ArticleDto::from_parts(article, author, is_favorited))
            })
            .collect()
    }

    pub async fn comment(
        &self,
        viewer: Option<UserId>,
        comment: Comment,
    ) -> ApplicationResult<CommentDto> {
        let author = self.load_author(comment.author_id).await?;
        let author = self.profile(viewer, &author).await?;
        Ok(CommentDto::from_parts(comment, author))
    }

    pub async fn comments(
        &self,
        viewer: Option<UserId>,
        comments: Vec<Comment>,
    ) -> ApplicationResult<Vec<CommentDto>> {
        if comments.is_empty() {
            return Ok(Vec::new());
        }

        let author_ids: Vec<UserId> = comments.iter().map(|c| c.author_id).collect();
        let profiles = self.profiles_by_id(viewer, &author_ids).await?;

        comments
            .into_iter()
            .map(|comment| {
                let author = profiles
                    .get(&comment.author_id)
                    .cloned()
                    .ok_or_else(|| dangling_author(comment.author_id))?;
                Ok(CommentDto::from_parts(comment, author))
            })
            .collect()
    }

    async fn profiles_by_id(
        &self,
        viewer: Option<UserId>,
        ids: &[UserId],
    ) -> ApplicationResult<HashMap<UserId, ProfileDto>> {
        let mut unique = ids.to_vec();
        unique.sort_unstable();
        unique.dedup();

        let users = self.user_repo.find_by_ids(&unique).await?;
        let following = self.follows.exists_bulk(viewer, &unique).await?;

        Ok(users
            .iter()
            .map(|user| {
                let profile = ProfileDto::from_user(user, following.contains(&user.id));
                (user.id, profile)
            })
            .collect())
    }

    async fn load_author(&self, id: UserId) -> ApplicationResult<User> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| dangling_author(id))
    }
}

fn dangling_author(id: UserId) -> ApplicationError {
    tracing::error!(author_id = %id, "content references a missing author");
    ApplicationError::NotFound(Entity::User)
}
