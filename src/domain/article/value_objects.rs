use crate::domain::errors::{DomainError, DomainResult};
use std::{collections::HashSet, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::validation("id", "must be positive"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

macro_rules! non_blank_text {
    ($name:ident, $field:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> DomainResult<Self> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(DomainError::validation($field, "can't be blank"));
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_blank_text!(ArticleTitle, "title");
non_blank_text!(ArticleDescription, "description");
non_blank_text!(ArticleBody, "body");
non_blank_text!(ArticleSlug, "slug");

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagName(String);

impl TagName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::validation("tagList", "tags can't be blank"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<TagName> for String {
    fn from(value: TagName) -> Self {
        value.0
    }
}

/// Ordered tag list of an article. Blank entries are dropped and repeated
/// names keep their first position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagList(Vec<TagName>);

impl TagList {
    pub fn from_raw<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let tags = raw
            .into_iter()
            .filter_map(|value| TagName::new(value).ok())
            .filter(|tag| seen.insert(tag.clone()))
            .collect();
        Self(tags)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TagName> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(|tag| tag.as_str().to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_rejected_with_its_field() {
        match ArticleDescription::new("  ").unwrap_err() {
            DomainError::Validation { field, .. } => assert_eq!(field, "description"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(ArticleTitle::new("How to train your dragon").is_ok());
    }

    #[test]
    fn tag_list_deduplicates_and_keeps_order() {
        let tags = TagList::from_raw(["dragons", " training ", "", "dragons", "angularjs"]);
        assert_eq!(tags.to_strings(), vec!["dragons", "training", "angularjs"]);
        assert_eq!(tags.len(), 3);
    }
}
