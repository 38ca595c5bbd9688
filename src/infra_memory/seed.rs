use super::store::MemoryStore;
use crate::application_port::CredentialHasher;
use crate::domain_model::*;
use anyhow::{Context, Result};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::sync::Arc;

/// Fixture for the memory backend. Passwords are given in clear and hashed
/// on load.
#[derive(Debug, Deserialize)]
pub struct Seed {
    pub users: Vec<SeedUser>,
}

#[derive(Debug, Deserialize)]
pub struct SeedUser {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: SecretString,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub owner: Option<SeedOwner>,
}

#[derive(Debug, Deserialize)]
pub struct SeedOwner {
    pub owner_id: OwnerId,
    pub name: String,
    pub email: String,
}

fn default_active() -> bool {
    true
}

impl Seed {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("parse seed")
    }

    pub async fn from_file(path: &str) -> Result<Self> {
        let json = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("read seed file {path}"))?;
        Self::from_json(&json)
    }

    /// Hashes every password and inserts the rows. Returns the user count.
    pub async fn load_into(
        self,
        store: &MemoryStore,
        hasher: Arc<dyn CredentialHasher>,
    ) -> Result<usize> {
        let rows = tokio::task::spawn_blocking(move || {
            self.users
                .into_iter()
                .map(|seed| {
                    let password_hash = hasher.hash_password(seed.password.expose_secret())?;
                    let user = UserRecord {
                        user_id: seed.user_id,
                        name: seed.name,
                        email: seed.email,
                        username: seed.username,
                        password_hash,
                        is_active: seed.is_active,
                    };
                    let owner = seed.owner.map(|owner| LinkedOwnerRecord {
                        owner_id: owner.owner_id,
                        user_id: seed.user_id,
                        name: owner.name,
                        email: owner.email,
                    });
                    Ok((user, owner))
                })
                .collect::<Result<Vec<_>, crate::application_port::AuthError>>()
        })
        .await??;

        let count = rows.len();
        for (user, owner) in rows {
            store.insert_user(user).await;
            if let Some(owner) = owner {
                store.insert_owner(owner).await;
            }
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application_impl::Argon2PasswordHasher;
    use crate::application_impl::test_support::cheap_hash_config;

    const SEED: &str = r#"
{
  "users": [
    {
      "user_id": "6f1c2d0e-8a4b-4c7e-9f3a-2b5d7e9c1a00",
      "name": "Ada",
      "email": "ada@example.com",
      "username": "ada",
      "password": "analytical",
      "owner": {
        "owner_id": "0b7e4f3c-1d2a-4e5f-8a9b-c0d1e2f3a4b5",
        "name": "Ada",
        "email": "ada@example.com"
      }
    },
    {
      "user_id": "9a8b7c6d-5e4f-4a3b-8c2d-1e0f9a8b7c6d",
      "name": "Bob",
      "email": "bob@example.com",
      "username": "bob",
      "password": "builder",
      "is_active": false
    }
  ]
}
"#;

    #[tokio::test]
    async fn loads_users_and_owners_with_hashed_passwords() {
        let store = MemoryStore::new();
        let hasher = Arc::new(Argon2PasswordHasher::new(cheap_hash_config()).unwrap());

        let count = Seed::from_json(SEED)
            .unwrap()
            .load_into(&store, hasher.clone())
            .await
            .unwrap();
        assert_eq!(count, 2);

        let ada_id: UserId = "6f1c2d0e-8a4b-4c7e-9f3a-2b5d7e9c1a00".parse().unwrap();
        let ada = store.user(ada_id).await.unwrap();
        assert_ne!(ada.password_hash, "analytical");
        assert!(hasher.verify_password("analytical", &ada.password_hash).unwrap());
        assert!(ada.is_active);
        assert_eq!(store.owner_of(ada_id).await.unwrap().email, "ada@example.com");

        let bob_id: UserId = "9a8b7c6d-5e4f-4a3b-8c2d-1e0f9a8b7c6d".parse().unwrap();
        assert!(!store.user(bob_id).await.unwrap().is_active);
        assert!(store.owner_of(bob_id).await.is_none());
    }

    #[test]
    fn debug_hides_seed_passwords() {
        let seed = Seed::from_json(SEED).unwrap();
        assert!(!format!("{seed:?}").contains("analytical"));
    }

    #[tokio::test]
    async fn missing_seed_file_is_an_error() {
        assert!(Seed::from_file("does/not/exist.json").await.is_err());
    }
}
