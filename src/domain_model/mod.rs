mod credentials;
mod patch;
mod user;

pub use credentials::*;
pub use patch::*;
pub use user::*;
