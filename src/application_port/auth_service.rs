use crate::domain_model::{LoginCredentials, OwnerId, UserId};

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("hash error: {0}")]
    Hash(String),
    #[error("user {0} not found")]
    UserNotFound(UserId),
    #[error("owner {0} not found")]
    OwnerNotFound(OwnerId),
    #[error("store error: {0}")]
    Store(String),
}

/// One-way, salted password hashing.
///
/// Implementations are CPU-heavy on purpose; async callers should move the
/// work off the runtime with `spawn_blocking`.
pub trait CredentialHasher: Send + Sync {
    fn hash_password(&self, password: &str) -> Result<String, AuthError>;
    fn verify_password(&self, password: &str, password_hash: &str) -> Result<bool, AuthError>;
}

/// The authentication backend a login is checked against.
#[async_trait::async_trait]
pub trait Authenticator: Send + Sync {
    /// `Ok(None)` means the credentials were rejected. Callers must not
    /// distinguish an unknown identifier from a wrong password.
    async fn attempt(&self, credentials: &LoginCredentials) -> Result<Option<UserId>, AuthError>;
}
