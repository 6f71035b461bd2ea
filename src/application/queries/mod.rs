pub mod articles;
pub mod comments;
pub mod profiles;
pub mod users;
