// tests/support/memory.rs
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use conduit_core::domain::article::{
    Article, ArticleFilter, ArticleId, ArticleReadRepository, ArticleSlice, ArticleSlug,
    ArticleUpdate, ArticleWriteRepository, NewArticle, PageWindow, TagName,
};
use conduit_core::domain::comment::{Comment, CommentId, CommentRepository, NewComment};
use conduit_core::domain::errors::{DomainError, DomainResult, Entity};
use conduit_core::domain::favorite::FavoriteRepository;
use conduit_core::domain::follow::FollowRepository;
use conduit_core::domain::user::{Email, NewUser, User, UserId, UserRepository, UserUpdate, Username};

#[derive(Default)]
struct State {
    next_user: i64,
    next_article: i64,
    next_comment: i64,
    users: BTreeMap<UserId, User>,
    articles: BTreeMap<ArticleId, Article>,
    comments: BTreeMap<CommentId, Comment>,
    follows: HashSet<(UserId, UserId)>,
    favorites: HashSet<(UserId, ArticleId)>,
    tags: BTreeSet<TagName>,
}

impl State {
    fn favorites_of(&self, article: ArticleId) -> u64 {
        self.favorites.iter().filter(|(_, a)| *a == article).count() as u64
    }

    fn hydrate(&self, article: &Article) -> Article {
        let mut article = article.clone();
        article.favorites_count = self.favorites_of(article.id);
        article
    }

    fn user_named(&self, username: &str) -> Option<UserId> {
        self.users
            .values()
            .find(|u| u.username.as_str() == username)
            .map(|u| u.id)
    }

    fn slug_owner(&self, slug: &ArticleSlug) -> Option<ArticleId> {
        self.articles
            .values()
            .find(|a| &a.slug == slug)
            .map(|a| a.id)
    }

    fn remember_tags(&mut self, article: &Article) {
        for tag in article.tag_list.iter() {
            self.tags.insert(tag.clone());
        }
    }

    /// Newest first, then applies the window. `total` counts every match.
    fn slice<F>(&self, keep: F, window: PageWindow) -> ArticleSlice
    where
        F: Fn(&Article) -> bool,
    {
        let mut matched: Vec<&Article> = self.articles.values().filter(|a| keep(a)).collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        let total = matched.len() as u64;
        let articles = matched
            .into_iter()
            .skip(window.offset as usize)
            .take(window.limit as usize)
            .map(|a| self.hydrate(a))
            .collect();
        ArticleSlice { articles, total }
    }
}

/// Single store behind every repository trait, so cascades and computed
/// counts behave like the relational schema. Edge lookups are counted to
/// check that list hydration stays bulk.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
    pub follow_lookups: AtomicUsize,
    pub favorite_lookups: AtomicUsize,
    pub user_lookups: AtomicUsize,
}

impl MemoryStore {
    pub fn article_count(&self) -> usize {
        self.state.lock().unwrap().articles.len()
    }

    pub fn comment_count(&self) -> usize {
        self.state.lock().unwrap().comments.len()
    }

    pub fn favorite_count(&self) -> usize {
        self.state.lock().unwrap().favorites.len()
    }

    pub fn reset_counters(&self) {
        self.follow_lookups.store(0, Ordering::SeqCst);
        self.favorite_lookups.store(0, Ordering::SeqCst);
        self.user_lookups.store(0, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut state = self.state.lock().unwrap();
        if state.users.values().any(|u| u.email == new_user.email) {
            return Err(DomainError::Conflict { field: "email" });
        }
        if state.users.values().any(|u| u.username == new_user.username) {
            return Err(DomainError::Conflict { field: "username" });
        }
        state.next_user += 1;
        let user = User {
            id: UserId(state.next_user),
            email: new_user.email,
            username: new_user.username,
            password_hash: new_user.password_hash,
            bio: None,
            image: None,
            created_at: new_user.created_at,
            updated_at: new_user.created_at,
        };
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut state = self.state.lock().unwrap();
        let others = || state.users.values().filter(|u| u.id != update.id);
        if let Some(email) = &update.email {
            if others().any(|u| &u.email == email) {
                return Err(DomainError::Conflict { field: "email" });
            }
        }
        if let Some(username) = &update.username {
            if others().any(|u| &u.username == username) {
                return Err(DomainError::Conflict { field: "username" });
            }
        }
        let user = state
            .users
            .get_mut(&update.id)
            .ok_or(DomainError::NotFound(Entity::User))?;
        update.apply_to(user);
        Ok(user.clone())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        self.user_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.state.lock().unwrap().users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.values().find(|u| &u.email == email).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.values().find(|u| &u.username == username).cloned())
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> DomainResult<Vec<User>> {
        self.user_lookups.fetch_add(1, Ordering::SeqCst);
        let state = self.state.lock().unwrap();
        Ok(ids.iter().filter_map(|id| state.users.get(id).cloned()).collect())
    }
}

#[async_trait]
impl ArticleWriteRepository for MemoryStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        if !state.users.contains_key(&article.author_id) {
            return Err(DomainError::NotFound(Entity::User));
        }
        if state.slug_owner(&article.slug).is_some() {
            return Err(DomainError::Conflict { field: "slug" });
        }
        state.next_article += 1;
        let created = Article {
            id: ArticleId(state.next_article),
            slug: article.slug,
            title: article.title,
            description: article.description,
            body: article.body,
            tag_list: article.tag_list,
            author_id: article.author_id,
            favorites_count: 0,
            created_at: article.created_at,
            updated_at: article.created_at,
        };
        state.remember_tags(&created);
        state.articles.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        if let Some(slug) = &update.slug {
            if matches!(state.slug_owner(slug), Some(owner) if owner != update.id) {
                return Err(DomainError::Conflict { field: "slug" });
            }
        }
        let article = state
            .articles
            .get_mut(&update.id)
            .ok_or(DomainError::NotFound(Entity::Article))?;
        update.apply_to(article);
        let updated = article.clone();
        state.remember_tags(&updated);
        Ok(state.hydrate(&updated))
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.articles.remove(&id).is_none() {
            return Err(DomainError::NotFound(Entity::Article));
        }
        state.comments.retain(|_, c| c.article_id != id);
        state.favorites.retain(|(_, a)| *a != id);
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for MemoryStore {
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .articles
            .values()
            .find(|a| &a.slug == slug)
            .map(|a| state.hydrate(a)))
    }

    async fn list(&self, filter: &ArticleFilter, window: PageWindow) -> DomainResult<ArticleSlice> {
        let state = self.state.lock().unwrap();
        let author = filter.author.as_deref().map(|name| state.user_named(name));
        let fan = filter.favorited_by.as_deref().map(|name| state.user_named(name));

        Ok(state.slice(
            |article| {
                let tag_ok = filter
                    .tag
                    .as_deref()
                    .is_none_or(|tag| article.tag_list.iter().any(|t| t.as_str() == tag));
                let author_ok = match author {
                    None => true,
                    Some(id) => id == Some(article.author_id),
                };
                let fan_ok = match fan {
                    None => true,
                    Some(None) => false,
                    Some(Some(user)) => state.favorites.contains(&(user, article.id)),
                };
                tag_ok && author_ok && fan_ok
            },
            window,
        ))
    }

    async fn feed(&self, follower: UserId, window: PageWindow) -> DomainResult<ArticleSlice> {
        let state = self.state.lock().unwrap();
        Ok(state.slice(
            |article| state.follows.contains(&(follower, article.author_id)),
            window,
        ))
    }

    async fn list_tags(&self) -> DomainResult<Vec<TagName>> {
        Ok(self.state.lock().unwrap().tags.iter().cloned().collect())
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut state = self.state.lock().unwrap();
        if !state.articles.contains_key(&comment.article_id) {
            return Err(DomainError::NotFound(Entity::Article));
        }
        if !state.users.contains_key(&comment.author_id) {
            return Err(DomainError::NotFound(Entity::User));
        }
        state.next_comment += 1;
        let created = Comment {
            id: CommentId(state.next_comment),
            body: comment.body,
            article_id: comment.article_id,
            author_id: comment.author_id,
            created_at: comment.created_at,
            updated_at: comment.created_at,
        };
        state.comments.insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        Ok(self.state.lock().unwrap().comments.get(&id).cloned())
    }

    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let state = self.state.lock().unwrap();
        let mut comments: Vec<Comment> = state
            .comments
            .values()
            .filter(|c| c.article_id == article_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(comments)
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        match self.state.lock().unwrap().comments.remove(&id) {
            Some(_) => Ok(()),
            None => Err(DomainError::NotFound(Entity::Comment)),
        }
    }
}

#[async_trait]
impl FollowRepository for MemoryStore {
    async fn insert(&self, follower: UserId, followee: UserId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        if follower == followee {
            return Err(DomainError::validation("profile", "cannot follow yourself"));
        }
        if !state.users.contains_key(&follower) || !state.users.contains_key(&followee) {
            return Err(DomainError::NotFound(Entity::Profile));
        }
        state.follows.insert((follower, followee));
        Ok(())
    }

    async fn delete(&self, follower: UserId, followee: UserId) -> DomainResult<()> {
        self.state.lock().unwrap().follows.remove(&(follower, followee));
        Ok(())
    }

    async fn exists(&self, follower: UserId, followee: UserId) -> DomainResult<bool> {
        self.follow_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.state.lock().unwrap().follows.contains(&(follower, followee)))
    }

    async fn existing(
        &self,
        follower: UserId,
        followees: &[UserId],
    ) -> DomainResult<HashSet<UserId>> {
        self.follow_lookups.fetch_add(1, Ordering::SeqCst);
        let state = self.state.lock().unwrap();
        Ok(followees
            .iter()
            .copied()
            .filter(|followee| state.follows.contains(&(follower, *followee)))
            .collect())
    }
}

#[async_trait]
impl FavoriteRepository for MemoryStore {
    async fn insert(&self, user: UserId, article: ArticleId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        if !state.articles.contains_key(&article) {
            return Err(DomainError::NotFound(Entity::Article));
        }
        state.favorites.insert((user, article));
        Ok(())
    }

    async fn delete(&self, user: UserId, article: ArticleId) -> DomainResult<()> {
        self.state.lock().unwrap().favorites.remove(&(user, article));
        Ok(())
    }

    async fn exists(&self, user: UserId, article: ArticleId) -> DomainResult<bool> {
        self.favorite_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.state.lock().unwrap().favorites.contains(&(user, article)))
    }

    async fn existing(
        &self,
        user: UserId,
        articles: &[ArticleId],
    ) -> DomainResult<HashSet<ArticleId>> {
        self.favorite_lookups.fetch_add(1, Ordering::SeqCst);
        let state = self.state.lock().unwrap();
        Ok(articles
            .iter()
            .copied()
            .filter(|article| state.favorites.contains(&(user, *article)))
            .collect())
    }

    async fn count(&self, article: ArticleId) -> DomainResult<u64> {
        Ok(self.state.lock().unwrap().favorites_of(article))
    }
}
