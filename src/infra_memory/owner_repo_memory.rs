use super::repo_tx_memory::StagedWrite;
use super::util::downcast;
use crate::application_port::*;
use crate::domain_model::*;
use crate::domain_port::*;

/// Reads and writes go through the transaction's store.
#[derive(Debug, Default)]
pub struct MemoryOwnerRepo;

impl MemoryOwnerRepo {
    pub fn new() -> Self {
        MemoryOwnerRepo
    }
}

#[async_trait::async_trait]
impl OwnerRepo for MemoryOwnerRepo {
    async fn get_by_user_in_tx<'t>(
        &self,
        tx: &mut dyn StorageTx<'t>,
        user_id: UserId,
    ) -> Result<Option<LinkedOwnerRecord>, AuthError> {
        let tx = downcast(tx)?;
        Ok(tx.store().owner_of(user_id).await)
    }

    async fn update_in_tx<'t>(
        &self,
        tx: &mut dyn StorageTx<'t>,
        patch: &LinkedOwnerRecordPatch,
    ) -> Result<(), AuthError> {
        let tx = downcast(tx)?;

        if tx.store().owner(patch.owner_id).await.is_none() {
            return Err(AuthError::OwnerNotFound(patch.owner_id));
        }

        tx.stage(StagedWrite::Owner(patch.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra_memory::{MemoryStore, MemoryTxManager};
    use std::sync::Arc;

    #[tokio::test]
    async fn updating_a_missing_owner_is_not_found() {
        let tx_manager = MemoryTxManager::new(Arc::new(MemoryStore::new()));
        let owner_id = OwnerId(uuid::Uuid::new_v4());

        let mut tx = tx_manager.begin().await.unwrap();
        let result = MemoryOwnerRepo::new()
            .update_in_tx(
                tx.as_mut(),
                &LinkedOwnerRecordPatch {
                    owner_id,
                    name: "B".to_string(),
                    email: "b@x.com".to_string(),
                },
            )
            .await;

        assert!(matches!(result, Err(AuthError::OwnerNotFound(id)) if id == owner_id));
    }
}
