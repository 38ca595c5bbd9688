use crate::application_port::*;
use crate::domain_model::*;
use crate::domain_port::{OwnerRepo, StorageTx, TxManager, UserRepo};
use std::sync::Arc;
use tracing::{info, warn};

pub struct RealProfileService {
    user_repo: Arc<dyn UserRepo>,
    owner_repo: Arc<dyn OwnerRepo>,
    resolver: Arc<dyn ProfileUpdateResolver>,
    tx_manager: Arc<dyn TxManager>,
}

impl RealProfileService {
    pub fn new(
        user_repo: Arc<dyn UserRepo>,
        owner_repo: Arc<dyn OwnerRepo>,
        resolver: Arc<dyn ProfileUpdateResolver>,
        tx_manager: Arc<dyn TxManager>,
    ) -> Self {
        Self {
            user_repo,
            owner_repo,
            resolver,
            tx_manager,
        }
    }

    /// Settles the password hash. Argon2 is the slow step, so it runs
    /// before the transaction takes any row lock.
    async fn resolve_password(
        &self,
        principal: &Principal,
        request: &ProfileUpdateRequest,
    ) -> Result<UserRecordPatch, ProfileError> {
        let resolver = self.resolver.clone();
        let principal = principal.clone();
        let request = request.clone();
        let update = tokio::task::spawn_blocking(move || {
            resolver.resolve(&principal, None, &request)
        })
        .await
        .map_err(|e| ProfileError::Hash(e.to_string()))??;
        Ok(update.user)
    }

    async fn save_in_tx<'t>(
        &self,
        tx: &mut dyn StorageTx<'t>,
        record: &UserRecord,
        user_patch: UserRecordPatch,
        request: &ProfileUpdateRequest,
    ) -> Result<ProfileUpdate, ProfileError> {
        let owner = self.owner_repo.get_by_user_in_tx(tx, record.user_id).await?;

        // With the new hash in place and the password cleared, resolving
        // again only fills in the owner patch and never hashes.
        let hashed = Principal::Record(UserRecord {
            password_hash: user_patch.password_hash,
            ..record.clone()
        });
        let update = self
            .resolver
            .resolve(&hashed, owner.as_ref(), &request.without_password())?;

        self.user_repo.update_password_in_tx(tx, &update.user).await?;
        if let Some(owner_patch) = &update.owner {
            self.owner_repo.update_in_tx(tx, owner_patch).await?;
        }

        Ok(update)
    }
}

#[async_trait::async_trait]
impl ProfileService for RealProfileService {
    async fn save(
        &self,
        principal: &Principal,
        request: ProfileUpdateRequest,
    ) -> Result<ProfileUpdate, ProfileError> {
        let record = principal.as_record().ok_or(ProfileError::InvalidRecordKind)?;

        let user_patch = self.resolve_password(principal, &request).await?;

        let mut tx = self
            .tx_manager
            .begin()
            .await
            .map_err(|e| ProfileError::Persistence(e.to_string()))?;

        let result = self
            .save_in_tx(tx.as_mut(), record, user_patch, &request)
            .await;

        match result {
            Ok(update) => {
                tx.commit()
                    .await
                    .map_err(|e| ProfileError::Persistence(e.to_string()))?;
                info!(
                    user_id = %record.user_id,
                    password_changed = update.password_changed(&record.password_hash),
                    owner_updated = update.owner.is_some(),
                    "profile saved"
                );
                Ok(update)
            }
            Err(e) => {
                if let Err(rollback_err) = tx.rollback().await {
                    warn!(user_id = %record.user_id, "rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}
