use super::store::MemoryStore;
use crate::application_port::*;
use crate::domain_model::*;
use crate::domain_port::*;
use std::sync::Arc;

pub struct MemoryAuthRepo {
    store: Arc<MemoryStore>,
}

impl MemoryAuthRepo {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        MemoryAuthRepo { store }
    }
}

#[async_trait::async_trait]
impl AuthRepo for MemoryAuthRepo {
    async fn find_credentials(
        &self,
        kind: LoginKind,
        identifier: &str,
    ) -> Result<Option<AuthCredentialsRecord>, AuthError> {
        let tables = self.store.tables.read().await;
        let found = tables.users.values().find(|user| match kind {
            LoginKind::Email => user.email == identifier,
            LoginKind::Username => user.username == identifier,
        });

        Ok(found.map(|user| AuthCredentialsRecord {
            user_id: user.user_id,
            password_hash: user.password_hash.clone(),
            is_active: user.is_active,
        }))
    }
}
