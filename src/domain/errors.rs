// src/domain/errors.rs
use std::fmt;
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Entities a lookup can fail to find. Kept distinct so callers can choose a
/// response per entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    User,
    Profile,
    Article,
    Comment,
}

impl Entity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Entity::User => "user",
            Entity::Profile => "profile",
            Entity::Article => "article",
            Entity::Comment => "comment",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{field} {message}")]
    Validation {
        field: &'static str,
        message: String,
    },
    #[error("{field} has already been taken")]
    Conflict { field: &'static str },
    #[error("{0} not found")]
    NotFound(Entity),
    #[error("persistence error during {context}")]
    Persistence {
        context: String,
        #[source]
        source: BoxError,
    },
}

impl DomainError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn persistence(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Persistence {
            context: context.into(),
            source: Box::new(source),
        }
    }

    pub fn is_conflict_on(&self, name: &str) -> bool {
        matches!(self, DomainError::Conflict { field } if *field == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persistence_keeps_its_source() {
        let io = std::io::Error::other("connection reset");
        let err = DomainError::persistence("articles.insert", io);
        let source = std::error::Error::source(&err).expect("source");
        assert_eq!(source.to_string(), "connection reset");
        assert_eq!(err.to_string(), "persistence error during articles.insert");
    }

    #[test]
    fn conflict_matches_field() {
        let err = DomainError::Conflict { field: "slug" };
        assert!(err.is_conflict_on("slug"));
        assert!(!err.is_conflict_on("email"));
        assert_eq!(err.to_string(), "slug has already been taken");
    }
}
