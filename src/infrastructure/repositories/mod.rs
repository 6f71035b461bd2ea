// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_article;
mod postgres_comment;
mod postgres_favorite;
mod postgres_follow;
mod postgres_user;

pub use error::map_sqlx;
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_comment::PostgresCommentRepository;
pub use postgres_favorite::PostgresFavoriteRepository;
pub use postgres_follow::PostgresFollowRepository;
pub use postgres_user::PostgresUserRepository;
