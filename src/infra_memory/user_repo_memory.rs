use super::repo_tx_memory::StagedWrite;
use super::store::MemoryStore;
use super::util::downcast;
use crate::application_port::*;
use crate::domain_model::*;
use crate::domain_port::*;
use std::sync::Arc;

pub struct MemoryUserRepo {
    store: Arc<MemoryStore>,
}

impl MemoryUserRepo {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        MemoryUserRepo { store }
    }
}

#[async_trait::async_trait]
impl UserRepo for MemoryUserRepo {
    async fn get(&self, user_id: UserId) -> Result<Option<UserRecord>, AuthError> {
        Ok(self.store.user(user_id).await)
    }

    async fn update_password_in_tx<'t>(
        &self,
        tx: &mut dyn StorageTx<'t>,
        patch: &UserRecordPatch,
    ) -> Result<(), AuthError> {
        let tx = downcast(tx)?;

        if tx.store().user(patch.user_id).await.is_none() {
            return Err(AuthError::UserNotFound(patch.user_id));
        }

        tx.stage(StagedWrite::Password {
            user_id: patch.user_id,
            password_hash: patch.password_hash.clone(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra_memory::MemoryTxManager;

    #[tokio::test]
    async fn updating_a_missing_user_is_not_found() {
        let store = Arc::new(MemoryStore::new());
        let repo = MemoryUserRepo::new(store.clone());
        let tx_manager = MemoryTxManager::new(store);
        let user_id = UserId(uuid::Uuid::new_v4());

        let mut tx = tx_manager.begin().await.unwrap();
        let result = repo
            .update_password_in_tx(
                tx.as_mut(),
                &UserRecordPatch {
                    user_id,
                    password_hash: "H1".to_string(),
                },
            )
            .await;

        assert!(matches!(result, Err(AuthError::UserNotFound(id)) if id == user_id));
    }
}
