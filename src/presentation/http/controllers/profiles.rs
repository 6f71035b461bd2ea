use crate::application::{
    commands::profiles::FollowUserCommand, dto::ProfileDto, queries::profiles::GetProfileQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: ProfileDto,
}

pub async fn get_profile(
    Extension(state): Extension<HttpState>,
    viewer: MaybeAuthenticated,
    Path(username): Path<String>,
) -> HttpResult<Json<ProfileResponse>> {
    state
        .services
        .profile_queries
        .get_profile(viewer.viewer(), GetProfileQuery { username })
        .await
        .into_http()
        .map(|profile| Json(ProfileResponse { profile }))
}

pub async fn follow(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(username): Path<String>,
) -> HttpResult<Json<ProfileResponse>> {
    state
        .services
        .profile_commands
        .follow_user(&actor, FollowUserCommand { username })
        .await
        .into_http()
        .map(|profile| Json(ProfileResponse { profile }))
}

pub async fn unfollow(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(username): Path<String>,
) -> HttpResult<Json<ProfileResponse>> {
    state
        .services
        .profile_commands
        .unfollow_user(&actor, FollowUserCommand { username })
        .await
        .into_http()
        .map(|profile| Json(ProfileResponse { profile }))
}
