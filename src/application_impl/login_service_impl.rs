use crate::application_port::*;
use crate::domain_model::UserId;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct RealLoginService {
    resolver: Arc<dyn LoginCredentialResolver>,
    authenticator: Arc<dyn Authenticator>,
}

impl RealLoginService {
    pub fn new(
        resolver: Arc<dyn LoginCredentialResolver>,
        authenticator: Arc<dyn Authenticator>,
    ) -> Self {
        Self {
            resolver,
            authenticator,
        }
    }
}

#[async_trait::async_trait]
impl LoginService for RealLoginService {
    async fn login(&self, input: LoginInput) -> Result<UserId, LoginError> {
        let credentials = self.resolver.resolve(&input.identifier, &input.password);
        debug!(kind = %credentials.kind, "resolved login identifier");

        match self.authenticator.attempt(&credentials).await {
            Ok(Some(user_id)) => {
                info!(%user_id, "login succeeded");
                Ok(user_id)
            }
            Ok(None) => {
                warn!(kind = %credentials.kind, "login rejected");
                Err(LoginError::CredentialRejected(self.resolver.failure()))
            }
            Err(e) => Err(LoginError::Internal(e.to_string())),
        }
    }
}
