use crate::application_port::*;
use crate::domain_model::*;
use std::sync::Arc;

pub struct DefaultProfileUpdateResolver {
    hasher: Arc<dyn CredentialHasher>,
}

impl DefaultProfileUpdateResolver {
    pub fn new(hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { hasher }
    }
}

impl ProfileUpdateResolver for DefaultProfileUpdateResolver {
    fn resolve(
        &self,
        current: &Principal,
        linked_owner: Option<&LinkedOwnerRecord>,
        submitted: &ProfileUpdateRequest,
    ) -> Result<ProfileUpdate, ProfileError> {
        let record = current.as_record().ok_or(ProfileError::InvalidRecordKind)?;

        let password_hash = match submitted.new_password() {
            Some(password) => self.hasher.hash_password(password)?,
            None => record.password_hash.clone(),
        };

        let owner = linked_owner.map(|owner| LinkedOwnerRecordPatch {
            owner_id: owner.owner_id,
            name: submitted.name.clone().unwrap_or_else(|| owner.name.clone()),
            email: submitted.email.clone().unwrap_or_else(|| owner.email.clone()),
        });

        Ok(ProfileUpdate {
            user: UserRecordPatch {
                user_id: record.user_id,
                password_hash,
            },
            owner,
        })
    }
}
