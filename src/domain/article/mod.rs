pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle};
pub use repository::{
    ArticleFilter, ArticleReadRepository, ArticleSlice, ArticleWriteRepository, PageWindow,
};
pub use value_objects::{
    ArticleBody, ArticleDescription, ArticleId, ArticleSlug, ArticleTitle, TagList, TagName,
};
