// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthToken, AuthenticatedUser},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

pub const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// User id, as a string.
    sub: String,
    iat: i64,
    exp: i64,
}

/// HS256 tokens. Verification is pinned to HS256 with zero leeway, so a
/// token signed with any other algorithm or past its expiry is rejected.
#[derive(Clone)]
pub struct JwtTokenManager {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl JwtTokenManager {
    pub fn new(secret: &str, ttl: std::time::Duration) -> ApplicationResult<Self> {
        if secret.len() < MIN_SECRET_LEN {
            return Err(ApplicationError::infrastructure(format!(
                "token secret must be at least {MIN_SECRET_LEN} bytes"
            )));
        }
        let ttl = Duration::from_std(ttl)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        })
    }

    fn sign(&self, claims: &Claims) -> ApplicationResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }
}

fn timestamp(secs: i64) -> ApplicationResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| ApplicationError::unauthenticated("token carries an invalid timestamp"))
}

#[async_trait]
impl TokenManager for JwtTokenManager {
    async fn issue(&self, user_id: UserId) -> ApplicationResult<AuthToken> {
        let issued_at = Utc::now();
        let expires_at = issued_at + self.ttl;
        let claims = Claims {
            sub: user_id.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        Ok(AuthToken {
            token: self.sign(&claims)?,
            issued_at,
            expires_at,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|err| {
            tracing::debug!(error = %err, "token rejected");
            ApplicationError::unauthenticated("invalid or expired token")
        })?;

        let id = data
            .claims
            .sub
            .parse::<i64>()
            .ok()
            .and_then(|raw| UserId::new(raw).ok())
            .ok_or_else(|| ApplicationError::unauthenticated("token subject is malformed"))?;

        Ok(AuthenticatedUser {
            id,
            issued_at: timestamp(data.claims.iat)?,
            expires_at: timestamp(data.claims.exp)?,
        })
    }
}
