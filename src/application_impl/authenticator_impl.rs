use crate::application_port::{AuthError, Authenticator, CredentialHasher};
use crate::domain_model::{LoginCredentials, UserId};
use crate::domain_port::AuthRepo;
use secrecy::ExposeSecret;
use std::sync::Arc;

/// Checks credentials against the stored Argon2 hash of the matching user.
pub struct RepoAuthenticator {
    auth_repo: Arc<dyn AuthRepo>,
    credential_hasher: Arc<dyn CredentialHasher>,
}

impl RepoAuthenticator {
    pub fn new(auth_repo: Arc<dyn AuthRepo>, credential_hasher: Arc<dyn CredentialHasher>) -> Self {
        Self {
            auth_repo,
            credential_hasher,
        }
    }
}

#[async_trait::async_trait]
impl Authenticator for RepoAuthenticator {
    async fn attempt(&self, credentials: &LoginCredentials) -> Result<Option<UserId>, AuthError> {
        let Some(rec) = self
            .auth_repo
            .find_credentials(credentials.kind, &credentials.identifier)
            .await?
        else {
            return Ok(None);
        };

        if !rec.is_active {
            return Ok(None);
        }

        let hasher = self.credential_hasher.clone();
        let password = credentials.password.clone();
        let password_hash = rec.password_hash;
        let ok = tokio::task::spawn_blocking(move || {
            hasher.verify_password(password.expose_secret(), &password_hash)
        })
        .await
        .map_err(|e| AuthError::Hash(e.to_string()))??;

        Ok(ok.then_some(rec.user_id))
    }
}
