use crate::domain_model::*;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub(super) struct Tables {
    pub(super) users: HashMap<UserId, UserRecord>,
    pub(super) owners: HashMap<OwnerId, LinkedOwnerRecord>,
}

/// In-process stand-in for the `user` and `owner` tables.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub(super) tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_user(&self, user: UserRecord) {
        self.tables.write().await.users.insert(user.user_id, user);
    }

    pub async fn insert_owner(&self, owner: LinkedOwnerRecord) {
        self.tables.write().await.owners.insert(owner.owner_id, owner);
    }

    pub async fn user(&self, user_id: UserId) -> Option<UserRecord> {
        self.tables.read().await.users.get(&user_id).cloned()
    }

    pub async fn owner(&self, owner_id: OwnerId) -> Option<LinkedOwnerRecord> {
        self.tables.read().await.owners.get(&owner_id).cloned()
    }

    pub async fn owner_of(&self, user_id: UserId) -> Option<LinkedOwnerRecord> {
        self.tables
            .read()
            .await
            .owners
            .values()
            .find(|owner| owner.user_id == user_id)
            .cloned()
    }
}
