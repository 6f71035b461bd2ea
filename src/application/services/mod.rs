// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        assembler::ReadModelAssembler,
        commands::{
            articles::ArticleCommandService, comments::CommentCommandService,
            profiles::ProfileCommandService, users::UserCommandService,
        },
        dto::AuthenticatedUser,
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
            util::SlugGenerator,
        },
        queries::{
            articles::ArticleQueryService, comments::CommentQueryService,
            profiles::ProfileQueryService, users::UserQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugService},
        comment::CommentRepository,
        favorite::{FavoriteRepository, FavoriteService},
        follow::{FollowRepository, FollowService},
        user::UserRepository,
    },
};

/// Repositories handed to [`ApplicationServices::new`].
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub article_writes: Arc<dyn ArticleWriteRepository>,
    pub article_reads: Arc<dyn ArticleReadRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub follows: Arc<dyn FollowRepository>,
    pub favorites: Arc<dyn FavoriteRepository>,
}

/// Hashing, token, clock and slug ports handed to [`ApplicationServices::new`].
pub struct Primitives {
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_manager: Arc<dyn TokenManager>,
    pub clock: Arc<dyn Clock>,
    pub slugger: Arc<dyn SlugGenerator>,
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub profile_commands: Arc<ProfileCommandService>,
    pub profile_queries: Arc<ProfileQueryService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub comment_queries: Arc<CommentQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(repos: Repositories, primitives: Primitives) -> Self {
        let Primitives {
            password_hasher,
            token_manager,
            clock,
            slugger,
        } = primitives;

        let follows = Arc::new(FollowService::new(Arc::clone(&repos.follows)));
        let favorites = Arc::new(FavoriteService::new(Arc::clone(&repos.favorites)));
        let assembler = Arc::new(ReadModelAssembler::new(
            Arc::clone(&repos.users),
            Arc::clone(&follows),
            Arc::clone(&favorites),
        ));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&repos.users),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&repos.users),
            Arc::clone(&token_manager),
        ));

        let profile_commands = Arc::new(ProfileCommandService::new(
            Arc::clone(&repos.users),
            Arc::clone(&follows),
        ));
        let profile_queries = Arc::new(ProfileQueryService::new(
            Arc::clone(&repos.users),
            Arc::clone(&assembler),
        ));

        let slug_service = Arc::new(ArticleSlugService::new(
            Arc::clone(&repos.article_reads),
            Arc::clone(&slugger),
        ));
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&repos.article_writes),
            Arc::clone(&repos.article_reads),
            slug_service,
            Arc::clone(&favorites),
            Arc::clone(&assembler),
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&repos.article_reads),
            Arc::clone(&assembler),
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&repos.article_reads),
            Arc::clone(&repos.comments),
            Arc::clone(&assembler),
            Arc::clone(&clock),
        ));
        let comment_queries = Arc::new(CommentQueryService::new(
            Arc::clone(&repos.article_reads),
            Arc::clone(&repos.comments),
            assembler,
        ));

        Self {
            user_commands,
            user_queries,
            profile_commands,
            profile_queries,
            article_commands,
            article_queries,
            comment_commands,
            comment_queries,
            token_manager,
        }
    }

    /// Resolves a raw bearer token to the caller's identity.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.token_manager.authenticate(token).await
    }
}
