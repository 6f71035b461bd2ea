use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// A freshly signed bearer token.
#[derive(Debug, Clone)]
pub struct AuthToken {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Identity resolved from a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AuthenticatedUser {
    pub fn viewer(actor: Option<&AuthenticatedUser>) -> Option<UserId> {
        actor.map(|actor| actor.id)
    }
}
