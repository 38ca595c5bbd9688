/// Opens storage transactions. A profile save runs all of its writes inside
/// one of these.
#[async_trait::async_trait]
pub trait TxManager: Send + Sync {
    async fn begin<'t>(&'t self) -> anyhow::Result<Box<dyn StorageTx<'t> + 't>>;
}

#[async_trait::async_trait]
pub trait StorageTx<'t>: Send {
    /// Name of the store that opened this transaction. Repositories check it
    /// before downcasting to their concrete transaction type.
    fn backend(&self) -> &'static str;

    async fn commit(self: Box<Self>) -> anyhow::Result<()>;
    async fn rollback(self: Box<Self>) -> anyhow::Result<()>;
}
