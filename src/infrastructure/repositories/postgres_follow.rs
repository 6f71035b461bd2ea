use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::follow::FollowRepository;
use crate::domain::user::UserId;
use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashSet;

#[derive(Clone)]
pub struct PostgresFollowRepository {
    pool: PgPool,
}

impl PostgresFollowRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepository for PostgresFollowRepository {
    #[tracing::instrument(skip(self))]
    async fn insert(&self, follower: UserId, followee: UserId) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO follows (follower_id, followee_id) VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(i64::from(follower))
        .bind(i64::from(followee))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx("follows.insert"))?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, follower: UserId, followee: UserId) -> DomainResult<()> {
        sqlx::query("DELETE FROM follows WHERE follower_id = $1 AND followee_id = $2")
            .bind(i64::from(follower))
            .bind(i64::from(followee))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx("follows.delete"))?;
        Ok(())
    }

    async fn exists(&self, follower: UserId, followee: UserId) -> DomainResult<bool> {
        sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM follows WHERE follower_id = $1 AND followee_id = $2)",
        )
        .bind(i64::from(follower))
        .bind(i64::from(followee))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx("follows.exists"))
    }

    async fn existing(
        &self,
        follower: UserId,
        followees: &[UserId],
    ) -> DomainResult<HashSet<UserId>> {
        let ids: Vec<i64> = followees.iter().map(|id| id.0).collect();
        let rows: Vec<i64> = sqlx::query_scalar(
            "SELECT followee_id FROM follows WHERE follower_id = $1 AND followee_id = ANY($2)",
        )
        .bind(i64::from(follower))
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx("follows.existing"))?;

        Ok(rows.into_iter().map(UserId).collect())
    }
}
