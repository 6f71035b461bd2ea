pub mod repository;
pub mod service;

pub use repository::FollowRepository;
pub use service::FollowService;
