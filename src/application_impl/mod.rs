mod argon2_hasher;
mod authenticator_impl;
mod login_credential_resolver;
mod login_service_impl;
mod profile_service_impl;
mod profile_update_resolver;

pub use argon2_hasher::*;
pub use authenticator_impl::*;
pub use login_credential_resolver::*;
pub use login_service_impl::*;
pub use profile_service_impl::*;
pub use profile_update_resolver::*;

#[cfg(test)]
pub(crate) mod test_support;
