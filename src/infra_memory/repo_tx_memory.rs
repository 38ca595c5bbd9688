use super::store::MemoryStore;
use crate::domain_model::*;
use crate::domain_port::{StorageTx, TxManager};
use std::sync::Arc;

pub(super) const BACKEND: &str = "memory";

pub struct MemoryTxManager {
    store: Arc<MemoryStore>,
}

impl MemoryTxManager {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        MemoryTxManager { store }
    }
}

#[async_trait::async_trait]
impl TxManager for MemoryTxManager {
    async fn begin<'t>(&'t self) -> anyhow::Result<Box<dyn StorageTx<'t> + 't>> {
        Ok(Box::new(MemoryTx::new(&self.store)))
    }
}

#[derive(Debug)]
pub(super) enum StagedWrite {
    Password { user_id: UserId, password_hash: String },
    Owner(LinkedOwnerRecordPatch),
}

/// Buffers writes until commit, then applies them under one write lock.
pub struct MemoryTx<'t> {
    store: &'t MemoryStore,
    staged: Vec<StagedWrite>,
}

impl<'t> MemoryTx<'t> {
    pub fn new(store: &'t MemoryStore) -> Self {
        MemoryTx {
            store,
            staged: Vec::new(),
        }
    }

    pub(super) fn store(&self) -> &'t MemoryStore {
        self.store
    }

    pub(super) fn stage(&mut self, write: StagedWrite) {
        self.staged.push(write);
    }
}

#[async_trait::async_trait]
impl<'t> StorageTx<'t> for MemoryTx<'t> {
    fn backend(&self) -> &'static str {
        BACKEND
    }

    async fn commit(self: Box<Self>) -> anyhow::Result<()> {
        let MemoryTx { store, staged } = *self;
        let mut tables = store.tables.write().await;

        for write in staged {
            match write {
                StagedWrite::Password {
                    user_id,
                    password_hash,
                } => {
                    if let Some(user) = tables.users.get_mut(&user_id) {
                        user.password_hash = password_hash;
                    }
                }
                StagedWrite::Owner(patch) => {
                    if let Some(owner) = tables.owners.get_mut(&patch.owner_id) {
                        owner.name = patch.name;
                        owner.email = patch.email;
                    }
                }
            }
        }
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> anyhow::Result<()> {
        Ok(())
    }
}
