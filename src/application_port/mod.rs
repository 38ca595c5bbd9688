mod auth_service;
mod login_service;
mod profile_service;

pub use auth_service::*;
pub use login_service::*;
pub use profile_service::*;
