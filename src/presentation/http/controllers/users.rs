// src/presentation/http/controllers/users.rs
use super::deserialize_some;
use crate::application::{
    commands::users::{LoginUserCommand, RegisterUserCommand, UpdateUserCommand},
    dto::UserDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct UserEnvelope<T> {
    pub user: T,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: UserDto,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub bio: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub image: Option<Option<String>>,
}

pub async fn register(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<UserEnvelope<RegisterRequest>>,
) -> HttpResult<(StatusCode, Json<UserResponse>)> {
    let RegisterRequest {
        username,
        email,
        password,
    } = payload.user;

    let user = state
        .services
        .user_commands
        .register(RegisterUserCommand {
            username,
            email,
            password,
        })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(UserResponse { user })))
}

pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<UserEnvelope<LoginRequest>>,
) -> HttpResult<Json<UserResponse>> {
    let LoginRequest { email, password } = payload.user;

    state
        .services
        .user_commands
        .login(LoginUserCommand { email, password })
        .await
        .into_http()
        .map(|user| Json(UserResponse { user }))
}

pub async fn current_user(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
) -> HttpResult<Json<UserResponse>> {
    state
        .services
        .user_queries
        .current_user(&actor)
        .await
        .into_http()
        .map(|user| Json(UserResponse { user }))
}

pub async fn update_user(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Json(payload): Json<UserEnvelope<UpdateUserRequest>>,
) -> HttpResult<Json<UserResponse>> {
    let UpdateUserRequest {
        email,
        username,
        password,
        bio,
        image,
    } = payload.user;

    let command = UpdateUserCommand {
        email,
        username,
        password,
        bio,
        image,
    };

    state
        .services
        .user_commands
        .update_user(&actor, command)
        .await
        .into_http()
        .map(|user| Json(UserResponse { user }))
}
