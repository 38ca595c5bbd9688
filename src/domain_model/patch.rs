use crate::domain_model::{OwnerId, UserId};
use serde::Serialize;

/// Field-level writes for the `user` row.
///
/// `password_hash` is always present: when no new password was submitted it
/// carries the current hash, so the write leaves the column unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecordPatch {
    pub user_id: UserId,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkedOwnerRecordPatch {
    pub owner_id: OwnerId,
    pub name: String,
    pub email: String,
}

/// Everything one profile save has to persist, in a single transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub user: UserRecordPatch,
    pub owner: Option<LinkedOwnerRecordPatch>,
}

impl ProfileUpdate {
    pub fn password_changed(&self, previous_hash: &str) -> bool {
        self.user.password_hash != previous_hash
    }
}
