// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleBody, ArticleDescription, ArticleFilter, ArticleId, ArticleReadRepository,
    ArticleSlice, ArticleSlug, ArticleTitle, ArticleUpdate, ArticleWriteRepository, NewArticle,
    PageWindow, TagList, TagName,
};
use crate::domain::errors::{DomainError, DomainResult, Entity};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, Transaction};

/// Tag names in list order plus the favorite count, both derived per row.
const ARTICLE_SELECT: &str = "SELECT a.id, a.slug, a.title, a.description, a.body, a.author_id, \
     a.created_at, a.updated_at, \
     ARRAY(SELECT t.name FROM article_tags atg JOIN tags t ON t.id = atg.tag_id \
           WHERE atg.article_id = a.id ORDER BY atg.position) AS tag_list, \
     (SELECT COUNT(*) FROM favorites f WHERE f.article_id = a.id) AS favorites_count \
     FROM articles a";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    slug: String,
    title: String,
    description: String,
    body: String,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    tag_list: Vec<String>,
    favorites_count: i64,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            slug: ArticleSlug::new(row.slug)?,
            title: ArticleTitle::new(row.title)?,
            description: ArticleDescription::new(row.description)?,
            body: ArticleBody::new(row.body)?,
            tag_list: TagList::from_raw(row.tag_list),
            author_id: UserId::new(row.author_id)?,
            favorites_count: u64::try_from(row.favorites_count).unwrap_or_default(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Get-or-create each tag and link it at its list position.
async fn link_tags(
    tx: &mut Transaction<'_, Postgres>,
    article_id: i64,
    tags: &TagList,
) -> DomainResult<()> {
    for (position, tag) in tags.iter().enumerate() {
        let tag_id: i64 = sqlx::query_scalar(
            "INSERT INTO tags (name) VALUES ($1)
             ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
             RETURNING id",
        )
        .bind(tag.as_str())
        .fetch_one(&mut **tx)
        .await
        .map_err(map_sqlx("tags.upsert"))?;

        sqlx::query("INSERT INTO article_tags (article_id, tag_id, position) VALUES ($1, $2, $3)")
            .bind(article_id)
            .bind(tag_id)
            .bind(position as i32)
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx("article_tags.insert"))?;
    }
    Ok(())
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    #[tracing::instrument(skip_all, fields(slug = %article.slug))]
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            slug,
            title,
            description,
            body,
            tag_list,
            author_id,
            created_at,
        } = article;

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(map_sqlx("articles.insert"))?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO articles (slug, title, description, body, author_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $6)
             RETURNING id",
        )
        .bind(slug.as_str())
        .bind(title.as_str())
        .bind(description.as_str())
        .bind(body.as_str())
        .bind(i64::from(author_id))
        .bind(created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx("articles.insert"))?;

        link_tags(&mut tx, id, &tag_list).await?;
        tx.commit().await.map_err(map_sqlx("articles.insert"))?;

        Ok(Article {
            id: ArticleId::new(id)?,
            slug,
            title,
            description,
            body,
            tag_list,
            author_id,
            favorites_count: 0,
            created_at,
            updated_at: created_at,
        })
    }

    #[tracing::instrument(skip_all, fields(article_id = update.id.0))]
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            slug,
            title,
            description,
            body,
            tag_list,
            updated_at,
        } = update;

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(map_sqlx("articles.update"))?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(String::from(slug));
        }
        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(String::from(title));
        }
        if let Some(description) = description {
            builder.push(", description = ");
            builder.push_bind(String::from(description));
        }
        if let Some(body) = body {
            builder.push(", body = ");
            builder.push_bind(String::from(body));
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING id");

        let updated: Option<i64> = builder
            .build_query_scalar()
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx("articles.update"))?;
        if updated.is_none() {
            return Err(DomainError::NotFound(Entity::Article));
        }

        if let Some(tags) = tag_list {
            sqlx::query("DELETE FROM article_tags WHERE article_id = $1")
                .bind(i64::from(id))
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx("article_tags.delete"))?;
            link_tags(&mut tx, i64::from(id), &tags).await?;
        }

        let row = sqlx::query_as::<_, ArticleRow>(&format!("{ARTICLE_SELECT} WHERE a.id = $1"))
            .bind(i64::from(id))
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx("articles.update"))?;

        tx.commit().await.map_err(map_sqlx("articles.update"))?;
        Article::try_from(row)
    }

    #[tracing::instrument(skip(self), fields(article_id = id.0))]
    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx("articles.delete"))?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(Entity::Article));
        }
        Ok(())
    }
}

impl PostgresArticleReadRepository {
    fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &ArticleFilter) {
        builder.push(" WHERE TRUE");

        if let Some(tag) = &filter.tag {
            builder.push(
                " AND EXISTS (SELECT 1 FROM article_tags atg JOIN tags t ON t.id = atg.tag_id \
                 WHERE atg.article_id = a.id AND t.name = ",
            );
            builder.push_bind(tag.clone());
            builder.push(")");
        }

        if let Some(author) = &filter.author {
            builder.push(" AND a.author_id = (SELECT id FROM users WHERE username = ");
            builder.push_bind(author.clone());
            builder.push(")");
        }

        if let Some(favorited_by) = &filter.favorited_by {
            builder.push(
                " AND EXISTS (SELECT 1 FROM favorites f JOIN users u ON u.id = f.user_id \
                 WHERE f.article_id = a.id AND u.username = ",
            );
            builder.push_bind(favorited_by.clone());
            builder.push(")");
        }
    }

    fn push_feed(builder: &mut QueryBuilder<'_, Postgres>, follower: UserId) {
        builder.push(" WHERE a.author_id IN (SELECT followee_id FROM follows WHERE follower_id = ");
        builder.push_bind(i64::from(follower));
        builder.push(")");
    }

    fn push_window(builder: &mut QueryBuilder<'_, Postgres>, window: PageWindow) {
        builder.push(" ORDER BY a.created_at DESC, a.id DESC LIMIT ");
        builder.push_bind(i64::from(window.limit));
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(window.offset).unwrap_or(i64::MAX));
    }

    async fn fetch_slice(
        &self,
        mut rows_query: QueryBuilder<'_, Postgres>,
        mut count_query: QueryBuilder<'_, Postgres>,
        context: &'static str,
    ) -> DomainResult<ArticleSlice> {
        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx(context))?;

        let rows = rows_query
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx(context))?;

        let articles = rows
            .into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ArticleSlice {
            articles,
            total: u64::try_from(total).unwrap_or_default(),
        })
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    #[tracing::instrument(skip(self), fields(slug = %slug))]
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!("{ARTICLE_SELECT} WHERE a.slug = $1"))
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx("articles.find_by_slug"))?;

        row.map(Article::try_from).transpose()
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self, filter: &ArticleFilter, window: PageWindow) -> DomainResult<ArticleSlice> {
        let mut rows_query = QueryBuilder::new(ARTICLE_SELECT);
        Self::push_filter(&mut rows_query, filter);
        Self::push_window(&mut rows_query, window);

        let mut count_query = QueryBuilder::new("SELECT COUNT(*) FROM articles a");
        Self::push_filter(&mut count_query, filter);

        self.fetch_slice(rows_query, count_query, "articles.list")
            .await
    }

    #[tracing::instrument(skip(self), fields(follower = %follower))]
    async fn feed(&self, follower: UserId, window: PageWindow) -> DomainResult<ArticleSlice> {
        let mut rows_query = QueryBuilder::new(ARTICLE_SELECT);
        Self::push_feed(&mut rows_query, follower);
        Self::push_window(&mut rows_query, window);

        let mut count_query = QueryBuilder::new("SELECT COUNT(*) FROM articles a");
        Self::push_feed(&mut count_query, follower);

        self.fetch_slice(rows_query, count_query, "articles.feed")
            .await
    }

    async fn list_tags(&self) -> DomainResult<Vec<TagName>> {
        let names: Vec<String> = sqlx::query_scalar("SELECT name FROM tags ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx("tags.list"))?;

        names.into_iter().map(TagName::new).collect()
    }
}
