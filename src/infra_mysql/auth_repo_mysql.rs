use super::util::store_err;
use crate::application_port::*;
use crate::domain_model::*;
use crate::domain_port::*;
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};

pub struct MySqlAuthRepo {
    pool: MySqlPool,
}

impl MySqlAuthRepo {
    pub fn new(pool: MySqlPool) -> Self {
        MySqlAuthRepo { pool }
    }

    fn row_to_record(row: MySqlRow) -> Result<AuthCredentialsRecord, AuthError> {
        Ok(AuthCredentialsRecord {
            user_id: row.try_get::<UserId, _>("user_id").map_err(store_err("user_id"))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(store_err("password_hash"))?,
            is_active: row.try_get("is_active").map_err(store_err("is_active"))?,
        })
    }
}

#[async_trait::async_trait]
impl AuthRepo for MySqlAuthRepo {
    async fn find_credentials(
        &self,
        kind: LoginKind,
        identifier: &str,
    ) -> Result<Option<AuthCredentialsRecord>, AuthError> {
        // `kind.column()` is one of two fixed names, never user input.
        let sql = format!(
            "SELECT user_id, password_hash, is_active FROM user WHERE {} = ?",
            kind.column()
        );

        let row_opt: Option<MySqlRow> = sqlx::query(&sql)
            .bind(identifier)
            .fetch_optional(&self.pool)
            .await
            .map_err(store_err("query credentials"))?;

        row_opt.map(Self::row_to_record).transpose()
    }
}
