use super::repo_tx_memory::{BACKEND, MemoryTx};
use crate::application_port::AuthError;
use crate::domain_port::*;

pub fn downcast<'a, 't>(tx: &'a mut dyn StorageTx<'t>) -> Result<&'a mut MemoryTx<'t>, AuthError> {
    if tx.backend() != BACKEND {
        return Err(AuthError::Store(format!(
            "expected a {BACKEND} transaction, got {}",
            tx.backend()
        )));
    }
    // SAFETY: only `MemoryTx` reports the memory backend name.
    unsafe {
        let p = tx as *mut dyn StorageTx<'t>;
        let p = p as *mut MemoryTx<'t>;
        Ok(&mut *p)
    }
}
