// tests/support/helpers.rs
use std::sync::Arc;
use std::time::Duration;

use axum::body::{self, Body};
use axum::http::{Request, Response, header::AUTHORIZATION, header::CONTENT_TYPE};
use serde_json::Value;

use conduit_core::application::commands::articles::CreateArticleCommand;
use conduit_core::application::commands::users::RegisterUserCommand;
use conduit_core::application::dto::{ArticleDto, AuthenticatedUser};
use conduit_core::application::services::{ApplicationServices, Primitives, Repositories};
use conduit_core::infrastructure::security::token::JwtTokenManager;
use conduit_core::infrastructure::util::DefaultSlugGenerator;
use conduit_core::presentation::http::routes::{RouterOptions, build_router};
use conduit_core::presentation::http::state::HttpState;

use super::memory::MemoryStore;
use super::mocks::{PlainPasswordHasher, TEST_SECRET, TickingClock};

pub struct TestApp {
    pub store: Arc<MemoryStore>,
    pub services: Arc<ApplicationServices>,
}

pub fn repositories(store: &Arc<MemoryStore>) -> Repositories {
    Repositories {
        users: store.clone(),
        article_writes: store.clone(),
        article_reads: store.clone(),
        comments: store.clone(),
        follows: store.clone(),
        favorites: store.clone(),
    }
}

pub fn primitives() -> Primitives {
    let token_manager = JwtTokenManager::new(TEST_SECRET, Duration::from_secs(3600))
        .expect("test secret is long enough");
    Primitives {
        password_hasher: Arc::new(PlainPasswordHasher),
        token_manager: Arc::new(token_manager),
        clock: Arc::new(TickingClock::default()),
        slugger: Arc::new(DefaultSlugGenerator),
    }
}

pub fn test_app_with(store: Arc<MemoryStore>, repos: Repositories) -> TestApp {
    let services = Arc::new(ApplicationServices::new(repos, primitives()));
    TestApp { store, services }
}

pub fn test_app() -> TestApp {
    let store = Arc::new(MemoryStore::default());
    let repos = repositories(&store);
    test_app_with(store, repos)
}

impl TestApp {
    pub fn router(&self) -> axum::Router {
        build_router(
            HttpState {
                services: Arc::clone(&self.services),
            },
            &RouterOptions::default(),
        )
    }

    /// Registers `name` with `name@example.com` / `secret-{name}` and returns
    /// the token plus the identity it resolves to.
    pub async fn register(&self, name: &str) -> (String, AuthenticatedUser) {
        let user = self
            .services
            .user_commands
            .register(RegisterUserCommand {
                username: name.into(),
                email: format!("{name}@example.com"),
                password: format!("secret-{name}"),
            })
            .await
            .expect("register");
        let actor = self
            .services
            .authenticate(&user.token)
            .await
            .expect("fresh token authenticates");
        (user.token, actor)
    }

    pub async fn write(&self, actor: &AuthenticatedUser, title: &str, tags: &[&str]) -> ArticleDto {
        self.services
            .article_commands
            .create_article(
                actor,
                CreateArticleCommand {
                    title: title.into(),
                    description: format!("about {title}"),
                    body: format!("body of {title}"),
                    tag_list: tags.iter().map(|t| t.to_string()).collect(),
                },
            )
            .await
            .expect("create article")
    }
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Token {token}"));
    }
    match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn body_json(resp: Response<Body>) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&bytes).unwrap_or_else(|err| {
        panic!(
            "response was not JSON ({err}): {}",
            String::from_utf8_lossy(&bytes)
        )
    })
}
