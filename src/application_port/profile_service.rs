use crate::application_port::AuthError;
use crate::domain_model::{LinkedOwnerRecord, Principal, ProfileUpdate};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("the authenticated principal is not a persistable user record")]
    InvalidRecordKind,
    #[error("user not found")]
    UserNotFound,
    #[error("hash error: {0}")]
    Hash(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl From<AuthError> for ProfileError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Hash(e) => ProfileError::Hash(e),
            AuthError::UserNotFound(_) => ProfileError::UserNotFound,
            // The owner row was read under lock in the same transaction, so a
            // miss here means the store is inconsistent.
            e @ AuthError::OwnerNotFound(_) => ProfileError::Persistence(e.to_string()),
            AuthError::Store(e) => ProfileError::Persistence(e),
        }
    }
}

/// Fields submitted from the edit profile form. `None` leaves a value as is.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdateRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<SecretString>,
}

impl ProfileUpdateRequest {
    /// The submitted password, treating an empty field as not submitted.
    pub fn new_password(&self) -> Option<&str> {
        self.password
            .as_ref()
            .map(|p| p.expose_secret())
            .filter(|p| !p.is_empty())
    }

    /// The same request with the password field cleared.
    pub fn without_password(&self) -> Self {
        Self {
            password: None,
            ..self.clone()
        }
    }
}

/// Computes the writes a profile save has to make. Never touches storage.
pub trait ProfileUpdateResolver: Send + Sync {
    fn resolve(
        &self,
        current: &Principal,
        linked_owner: Option<&LinkedOwnerRecord>,
        submitted: &ProfileUpdateRequest,
    ) -> Result<ProfileUpdate, ProfileError>;
}

#[async_trait::async_trait]
pub trait ProfileService: Send + Sync {
    /// Resolves and persists a profile save for `principal` atomically.
    async fn save(
        &self,
        principal: &Principal,
        request: ProfileUpdateRequest,
    ) -> Result<ProfileUpdate, ProfileError>;
}
