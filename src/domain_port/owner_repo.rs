use crate::application_port::*;
use crate::domain_model::*;
use crate::domain_port::repo_tx::StorageTx;

#[async_trait::async_trait]
pub trait OwnerRepo: Send + Sync {
    /// The owner row linked to `user_id`, if the user has one.
    async fn get_by_user_in_tx<'t>(
        &self,
        tx: &mut dyn StorageTx<'t>,
        user_id: UserId,
    ) -> Result<Option<LinkedOwnerRecord>, AuthError>;

    async fn update_in_tx<'t>(
        &self,
        tx: &mut dyn StorageTx<'t>,
        patch: &LinkedOwnerRecordPatch,
    ) -> Result<(), AuthError>;
}
