mod auth_repo;
mod owner_repo;
mod user_repo;

mod repo_tx;

pub use auth_repo::*;
pub use owner_repo::*;
pub use user_repo::*;

pub use repo_tx::*;
