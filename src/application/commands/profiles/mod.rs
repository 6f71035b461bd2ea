mod follow;
mod service;

pub use follow::FollowUserCommand;
pub use service::ProfileCommandService;
