pub mod articles;
pub mod auth;
pub mod comments;
pub mod pagination;
pub mod profiles;
pub mod serde_time;
pub mod users;

pub use articles::{ArticleDto, ArticlePageDto};
pub use auth::{AuthToken, AuthenticatedUser};
pub use comments::CommentDto;
pub use pagination::{DEFAULT_LIMIT, MAX_LIMIT, PageRequest};
pub use profiles::ProfileDto;
pub use users::UserDto;
