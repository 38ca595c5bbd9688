use crate::domain_model::{FieldError, LoginCredentials, UserId};
use secrecy::SecretString;

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("{}", .0.message)]
    CredentialRejected(FieldError),
    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Clone)]
pub struct LoginInput {
    pub identifier: String,
    pub password: SecretString,
}

pub trait LoginCredentialResolver: Send + Sync {
    fn resolve(&self, identifier: &str, password: &SecretString) -> LoginCredentials;

    /// The message shown when the backend rejects the credentials, bound to
    /// the identifier field. Identical for every rejection.
    fn failure(&self) -> FieldError;
}

#[async_trait::async_trait]
pub trait LoginService: Send + Sync {
    async fn login(&self, input: LoginInput) -> Result<UserId, LoginError>;
}
