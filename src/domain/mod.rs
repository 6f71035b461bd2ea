pub mod article;
pub mod comment;
pub mod errors;
pub mod favorite;
pub mod follow;
pub mod user;
