use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::favorite::FavoriteRepository;
use crate::domain::user::UserId;
use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashSet;

#[derive(Clone)]
pub struct PostgresFavoriteRepository {
    pool: PgPool,
}

impl PostgresFavoriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteRepository for PostgresFavoriteRepository {
    #[tracing::instrument(skip(self))]
    async fn insert(&self, user: UserId, article: ArticleId) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO favorites (user_id, article_id) VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(i64::from(user))
        .bind(i64::from(article))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx("favorites.insert"))?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, user: UserId, article: ArticleId) -> DomainResult<()> {
        sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND article_id = $2")
            .bind(i64::from(user))
            .bind(i64::from(article))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx("favorites.delete"))?;
        Ok(())
    }

    async fn exists(&self, user: UserId, article: ArticleId) -> DomainResult<bool> {
        sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM favorites WHERE user_id = $1 AND article_id = $2)",
        )
        .bind(i64::from(user))
        .bind(i64::from(article))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx("favorites.exists"))
    }

    async fn existing(
        &self,
        user: UserId,
        articles: &[ArticleId],
    ) -> DomainResult<HashSet<ArticleId>> {
        let ids: Vec<i64> = articles.iter().map(|id| id.0).collect();
        let rows: Vec<i64> = sqlx::query_scalar(
            "SELECT article_id FROM favorites WHERE user_id = $1 AND article_id = ANY($2)",
        )
        .bind(i64::from(user))
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx("favorites.existing"))?;

        Ok(rows.into_iter().map(ArticleId).collect())
    }

    async fn count(&self, article: ArticleId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM favorites WHERE article_id = $1")
            .bind(i64::from(article))
            .fetch_one(&self.pool)
            .await
            .map(|count| u64::try_from(count).unwrap_or_default())
            .map_err(map_sqlx("favorites.count"))
    }
}
