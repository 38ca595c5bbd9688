use crate::application_port::*;
use crate::domain_model::*;

#[derive(Debug, Clone)]
pub struct AuthCredentialsRecord {
    pub user_id: UserId,
    pub password_hash: String,
    pub is_active: bool,
}

#[async_trait::async_trait]
pub trait AuthRepo: Send + Sync {
    /// Fetch credentials by email or username, depending on `kind`.
    async fn find_credentials(
        &self,
        kind: LoginKind,
        identifier: &str,
    ) -> Result<Option<AuthCredentialsRecord>, AuthError>;
}
