use crate::domain::errors::{DomainError, Entity};

const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_USER_USERNAME: &str = "users_username_key";
const CNT_ARTICLE_SLUG: &str = "articles_slug_key";
const CNT_ARTICLE_AUTHOR: &str = "articles_author_id_fkey";
const CNT_COMMENT_ARTICLE: &str = "comments_article_id_fkey";
const CNT_COMMENT_AUTHOR: &str = "comments_author_id_fkey";
const CNT_FOLLOW_FOLLOWER: &str = "follows_follower_id_fkey";
const CNT_FOLLOW_FOLLOWEE: &str = "follows_followee_id_fkey";
const CNT_FOLLOW_NO_SELF: &str = "follows_no_self_chk";
const CNT_FAVORITE_USER: &str = "favorites_user_id_fkey";
const CNT_FAVORITE_ARTICLE: &str = "favorites_article_id_fkey";

/// Builds an error mapper for one repository operation. Known constraints
/// become typed domain errors; everything else is logged here once and
/// wrapped as `Persistence` with the driver error kept as its source.
pub fn map_sqlx(context: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |err| classify(context, err)
}

fn classify(context: &'static str, err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err {
        if let Some(mapped) = db_err.constraint().and_then(by_constraint) {
            return mapped;
        }

        match db_err.code().as_deref() {
            Some("23505") => return DomainError::Conflict { field: "record" },
            Some("23514") => {
                return DomainError::validation("base", "violates a consistency rule");
            }
            _ => {}
        }
    }

    tracing::error!(context, error = %err, "storage operation failed");
    DomainError::persistence(context, err)
}

fn by_constraint(constraint: &str) -> Option<DomainError> {
    let mapped = match constraint {
        CNT_USER_EMAIL => DomainError::Conflict { field: "email" },
        CNT_USER_USERNAME => DomainError::Conflict { field: "username" },
        CNT_ARTICLE_SLUG => DomainError::Conflict { field: "slug" },
        CNT_ARTICLE_AUTHOR | CNT_COMMENT_AUTHOR | CNT_FAVORITE_USER => {
            DomainError::NotFound(Entity::User)
        }
        CNT_COMMENT_ARTICLE | CNT_FAVORITE_ARTICLE => DomainError::NotFound(Entity::Article),
        CNT_FOLLOW_FOLLOWER | CNT_FOLLOW_FOLLOWEE => DomainError::NotFound(Entity::Profile),
        CNT_FOLLOW_NO_SELF => DomainError::validation("profile", "cannot follow yourself"),
        _ => return None,
    };
    Some(mapped)
}
