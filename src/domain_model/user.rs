use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(transparent)]
pub struct UserId(pub uuid::Uuid);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        uuid::Uuid::from_str(s).map(UserId)
    }
}

#[derive(
    Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(transparent)]
pub struct OwnerId(pub uuid::Uuid);

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted `user` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub is_active: bool,
}

/// The optional `owner` row that mirrors a user's display fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedOwnerRecord {
    pub owner_id: OwnerId,
    pub user_id: UserId,
    pub name: String,
    pub email: String,
}

/// Whoever the host authenticated for the current request.
///
/// Guards that are not backed by the `user` table hand over an `External`
/// principal; those can log in but have no row a profile save could update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Principal {
    Record(UserRecord),
    External { label: String },
}

impl Principal {
    pub fn as_record(&self) -> Option<&UserRecord> {
        match self {
            Principal::Record(record) => Some(record),
            Principal::External { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::{MySql, Type};

    #[test]
    fn ids_bind_as_binary_uuids() {
        assert_eq!(<UserId as Type<MySql>>::type_info(), <uuid::Uuid as Type<MySql>>::type_info());
        assert_eq!(<OwnerId as Type<MySql>>::type_info(), <uuid::Uuid as Type<MySql>>::type_info());
    }

    #[test]
    fn user_id_parses_from_its_display_form() {
        let id = UserId(uuid::Uuid::new_v4());
        assert_eq!(id.to_string().parse::<UserId>().unwrap(), id);
    }
}
