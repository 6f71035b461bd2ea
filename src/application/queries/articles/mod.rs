mod feed;
mod get;
mod list;
mod service;
mod tags;

pub use feed::FeedQuery;
pub use get::GetArticleQuery;
pub use list::ListArticlesQuery;
pub use service::ArticleQueryService;
