// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// A request that must carry a valid token.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

/// A request that may carry a token. A token that is present but invalid is
/// still rejected.
#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedUser>);

impl MaybeAuthenticated {
    pub fn viewer(&self) -> Option<&AuthenticatedUser> {
        self.0.as_ref()
    }
}

/// Accepts both `Authorization: Token <jwt>` and `Authorization: Bearer <jwt>`.
fn raw_token(parts: &Parts) -> Option<String> {
    if let Some(bearer) = parts.headers.typed_get::<Authorization<Bearer>>() {
        return Some(bearer.token().to_string());
    }
    parts
        .headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Token ")
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

async fn resolve(parts: &Parts, token: &str) -> Result<AuthenticatedUser, HttpError> {
    let state = parts.extensions.get::<HttpState>().ok_or_else(|| {
        HttpError::from_error(ApplicationError::infrastructure(
            "application state missing",
        ))
    })?;

    state
        .services
        .authenticate(token)
        .await
        .map_err(HttpError::from_error)
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = raw_token(parts).ok_or_else(|| {
            HttpError::from_error(ApplicationError::unauthenticated(
                "missing authorization token",
            ))
        })?;
        resolve(parts, &token).await.map(Self)
    }
}

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match raw_token(parts) {
            Some(token) => resolve(parts, &token).await.map(|user| Self(Some(user))),
            None => Ok(Self(None)),
        }
    }
}
