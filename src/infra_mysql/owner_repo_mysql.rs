use super::util::{downcast, row_exists, store_err};
use crate::application_port::*;
use crate::domain_model::*;
use crate::domain_port::*;
use sqlx::Row;
use sqlx::mysql::MySqlRow;

#[derive(Debug, Default)]
pub struct MySqlOwnerRepo;

impl MySqlOwnerRepo {
    pub fn new() -> Self {
        MySqlOwnerRepo
    }

    fn row_to_record(row: MySqlRow) -> Result<LinkedOwnerRecord, AuthError> {
        Ok(LinkedOwnerRecord {
            owner_id: row.try_get::<OwnerId, _>("owner_id").map_err(store_err("owner_id"))?,
            user_id: row.try_get::<UserId, _>("user_id").map_err(store_err("user_id"))?,
            name: row.try_get("name").map_err(store_err("name"))?,
            email: row.try_get("email").map_err(store_err("email"))?,
        })
    }
}

#[async_trait::async_trait]
impl OwnerRepo for MySqlOwnerRepo {
    async fn get_by_user_in_tx<'t>(
        &self,
        tx: &mut dyn StorageTx<'t>,
        user_id: UserId,
    ) -> Result<Option<LinkedOwnerRecord>, AuthError> {
        let tx = downcast(tx)?;

        // Lock the row so a concurrent save cannot interleave with ours.
        let row_opt = sqlx::query(
            r#"
SELECT owner_id, user_id, name, email
FROM owner
WHERE user_id = ?
FOR UPDATE
"#,
        )
        .bind(user_id)
        .fetch_optional(tx.conn())
        .await
        .map_err(store_err("query owner"))?;

        row_opt.map(Self::row_to_record).transpose()
    }

    async fn update_in_tx<'t>(
        &self,
        tx: &mut dyn StorageTx<'t>,
        patch: &LinkedOwnerRecordPatch,
    ) -> Result<(), AuthError> {
        let tx = downcast(tx)?;

        let result = sqlx::query("UPDATE owner SET name = ?, email = ? WHERE owner_id = ?")
            .bind(&patch.name)
            .bind(&patch.email)
            .bind(patch.owner_id)
            .execute(tx.conn())
            .await
            .map_err(store_err("update owner"))?;

        if result.rows_affected() == 0
            && !row_exists(
                tx.conn(),
                "SELECT COUNT(*) FROM owner WHERE owner_id = ?",
                patch.owner_id,
            )
            .await?
        {
            return Err(AuthError::OwnerNotFound(patch.owner_id));
        }

        Ok(())
    }
}
