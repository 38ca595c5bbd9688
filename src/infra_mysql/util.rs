use super::repo_tx_mysql::{BACKEND, MySqlTx};
use crate::application_port::AuthError;
use crate::domain_port::*;
use sqlx::MySqlConnection;

pub fn downcast<'a, 't>(tx: &'a mut dyn StorageTx<'t>) -> Result<&'a mut MySqlTx<'t>, AuthError> {
    if tx.backend() != BACKEND {
        return Err(AuthError::Store(format!(
            "expected a {BACKEND} transaction, got {}",
            tx.backend()
        )));
    }
    // SAFETY: only `MySqlTx` reports the mysql backend name.
    unsafe {
        let p = tx as *mut dyn StorageTx<'t>;
        let p = p as *mut MySqlTx<'t>;
        Ok(&mut *p)
    }
}

pub fn store_err(context: &str) -> impl FnOnce(sqlx::Error) -> AuthError + '_ {
    move |e| AuthError::Store(format!("{context}: {e}"))
}

/// Whether `sql` (a `SELECT COUNT(*) ... WHERE <id> = ?` query) finds a row.
///
/// An `UPDATE` that writes the values already stored may report zero
/// affected rows depending on the connection flags, so a zero count is only
/// trusted after this check.
pub async fn row_exists<T>(conn: &mut MySqlConnection, sql: &str, id: T) -> Result<bool, AuthError>
where
    T: for<'q> sqlx::Encode<'q, sqlx::MySql> + sqlx::Type<sqlx::MySql> + Send,
{
    let count: i64 = sqlx::query_scalar(sql)
        .bind(id)
        .fetch_one(conn)
        .await
        .map_err(store_err("check row"))?;
    Ok(count > 0)
}
