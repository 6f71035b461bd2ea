pub mod repository;
pub mod service;

pub use repository::FavoriteRepository;
pub use service::{FavoriteService, FavoriteState};
