use super::util::{downcast, row_exists, store_err};
use crate::application_port::*;
use crate::domain_model::*;
use crate::domain_port::*;
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};

pub struct MySqlUserRepo {
    pool: MySqlPool,
}

impl MySqlUserRepo {
    pub fn new(pool: MySqlPool) -> Self {
        MySqlUserRepo { pool }
    }

    fn row_to_record(row: MySqlRow) -> Result<UserRecord, AuthError> {
        Ok(UserRecord {
            user_id: row.try_get::<UserId, _>("user_id").map_err(store_err("user_id"))?,
            name: row.try_get("name").map_err(store_err("name"))?,
            email: row.try_get("email").map_err(store_err("email"))?,
            username: row.try_get("username").map_err(store_err("username"))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(store_err("password_hash"))?,
            is_active: row.try_get("is_active").map_err(store_err("is_active"))?,
        })
    }
}

#[async_trait::async_trait]
impl UserRepo for MySqlUserRepo {
    async fn get(&self, user_id: UserId) -> Result<Option<UserRecord>, AuthError> {
        let row_opt = sqlx::query(
            r#"
SELECT user_id, name, email, username, password_hash, is_active
FROM user
WHERE user_id = ?
"#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_err("query user"))?;

        row_opt.map(Self::row_to_record).transpose()
    }

    async fn update_password_in_tx<'t>(
        &self,
        tx: &mut dyn StorageTx<'t>,
        patch: &UserRecordPatch,
    ) -> Result<(), AuthError> {
        let tx = downcast(tx)?;

        let result = sqlx::query("UPDATE user SET password_hash = ? WHERE user_id = ?")
            .bind(&patch.password_hash)
            .bind(patch.user_id)
            .execute(tx.conn())
            .await
            .map_err(store_err("update password"))?;

        if result.rows_affected() == 0
            && !row_exists(
                tx.conn(),
                "SELECT COUNT(*) FROM user WHERE user_id = ?",
                patch.user_id,
            )
            .await?
        {
            return Err(AuthError::UserNotFound(patch.user_id));
        }

        Ok(())
    }
}
