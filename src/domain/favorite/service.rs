use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::article::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::user::UserId;

/// Edge state of a favorite after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FavoriteState {
    pub favorited: bool,
    pub favorites_count: u64,
}

pub struct FavoriteService {
    repo: Arc<dyn FavoriteRepository>,
}

impl FavoriteService {
    pub fn new(repo: Arc<dyn FavoriteRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, user: UserId, article: ArticleId) -> DomainResult<FavoriteState> {
        self.repo.insert(user, article).await?;
        Ok(FavoriteState {
            favorited: true,
            favorites_count: self.repo.count(article).await?,
        })
    }

    pub async fn remove(&self, user: UserId, article: ArticleId) -> DomainResult<FavoriteState> {
        self.repo.delete(user, article).await?;
        Ok(FavoriteState {
            favorited: false,
            favorites_count: self.repo.count(article).await?,
        })
    }

    pub async fn exists(&self, user: Option<UserId>, article: ArticleId) -> DomainResult<bool> {
        match user {
            Some(user) => self.repo.exists(user, article).await,
            None => Ok(false),
        }
    }

    pub async fn exists_bulk(
        &self,
        user: Option<UserId>,
        articles: &[ArticleId],
    ) -> DomainResult<HashSet<ArticleId>> {
        match user {
            Some(user) if !articles.is_empty() => self.repo.existing(user, articles).await,
            _ => Ok(HashSet::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryFavorites(Mutex<HashSet<(UserId, ArticleId)>>);

    #[async_trait]
    impl FavoriteRepository for MemoryFavorites {
        async fn insert(&self, user: UserId, article: ArticleId) -> DomainResult<()> {
            self.0.lock().unwrap().insert((user, article));
            Ok(())
        }

        async fn delete(&self, user: UserId, article: ArticleId) -> DomainResult<()> {
            self.0.lock().unwrap().remove(&(user, article));
            Ok(())
        }

        async fn exists(&self, user: UserId, article: ArticleId) -> DomainResult<bool> {
            Ok(self.0.lock().unwrap().contains(&(user, article)))
        }

        async fn existing(
            &self,
            user: UserId,
            articles: &[ArticleId],
        ) -> DomainResult<HashSet<ArticleId>> {
            let edges = self.0.lock().unwrap();
            Ok(articles
                .iter()
                .copied()
                .filter(|article| edges.contains(&(user, *article)))
                .collect())
        }

        async fn count(&self, article: ArticleId) -> DomainResult<u64> {
            let edges = self.0.lock().unwrap();
            Ok(edges.iter().filter(|(_, a)| *a == article).count() as u64)
        }
    }

    #[tokio::test]
    async fn count_tracks_distinct_users() {
        let svc = FavoriteService::new(Arc::new(MemoryFavorites::default()));
        let article = ArticleId(10);

        let state = svc.create(UserId(1), article).await.unwrap();
        assert_eq!(state, FavoriteState { favorited: true, favorites_count: 1 });

        let state = svc.create(UserId(1), article).await.unwrap();
        assert_eq!(state.favorites_count, 1);

        let state = svc.create(UserId(2), article).await.unwrap();
        assert_eq!(state.favorites_count, 2);

        let state = svc.remove(UserId(1), article).await.unwrap();
        assert_eq!(state, FavoriteState { favorited: false, favorites_count: 1 });

        let state = svc.remove(UserId(1), article).await.unwrap();
        assert_eq!(state.favorites_count, 1);
    }

    #[tokio::test]
    async fn anonymous_viewer_never_favorited() {
        let svc = FavoriteService::new(Arc::new(MemoryFavorites::default()));
        svc.create(UserId(1), ArticleId(5)).await.unwrap();
        assert!(!svc.exists(None, ArticleId(5)).await.unwrap());
        assert!(svc.exists_bulk(None, &[ArticleId(5)]).await.unwrap().is_empty());
        assert_eq!(
            svc.exists_bulk(Some(UserId(1)), &[ArticleId(5), ArticleId(6)])
                .await
                .unwrap(),
            HashSet::from([ArticleId(5)])
        );
    }
}
