mod auth_repo_memory;
mod owner_repo_memory;
mod user_repo_memory;

pub use auth_repo_memory::*;
pub use owner_repo_memory::*;
pub use user_repo_memory::*;

mod repo_tx_memory;
mod seed;
mod store;

pub use repo_tx_memory::*;
pub use seed::*;
pub use store::*;

mod util;
