use super::HashConfig;
use crate::domain_model::*;

/// Smallest Argon2 cost the crate accepts; keeps tests fast.
pub(crate) fn cheap_hash_config() -> HashConfig {
    HashConfig {
        memory_kib: 8,
        iterations: 1,
        parallelism: 1,
    }
}

pub(crate) fn sample_user(name: &str, email: &str, password_hash: &str) -> UserRecord {
    UserRecord {
        user_id: UserId(uuid::Uuid::new_v4()),
        name: name.to_string(),
        email: email.to_string(),
        username: name.to_lowercase(),
        password_hash: password_hash.to_string(),
        is_active: true,
    }
}

pub(crate) fn sample_owner(user: &UserRecord) -> LinkedOwnerRecord {
    LinkedOwnerRecord {
        owner_id: OwnerId(uuid::Uuid::new_v4()),
        user_id: user.user_id,
        name: user.name.clone(),
        email: user.email.clone(),
    }
}
