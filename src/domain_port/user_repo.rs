use crate::application_port::*;
use crate::domain_model::*;
use crate::domain_port::repo_tx::StorageTx;

#[async_trait::async_trait]
pub trait UserRepo: Send + Sync {
    async fn get(&self, user_id: UserId) -> Result<Option<UserRecord>, AuthError>;

    async fn update_password_in_tx<'t>(
        &self,
        tx: &mut dyn StorageTx<'t>,
        patch: &UserRecordPatch,
    ) -> Result<(), AuthError>;
}
