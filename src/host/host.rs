use crate::application_impl::*;
use crate::application_port::*;
use crate::domain_port::*;
use crate::infra_memory::*;
use crate::infra_mysql::*;
use crate::logger::*;
use crate::settings::Settings;
use secrecy::ExposeSecret;
use sqlx::{MySql, Pool};
use std::sync::Arc;

struct Storage {
    user_repo: Arc<dyn UserRepo>,
    owner_repo: Arc<dyn OwnerRepo>,
    auth_repo: Arc<dyn AuthRepo>,
    tx_manager: Arc<dyn TxManager>,
}

/// Wires the resolvers into the services the host pages call.
pub struct Host {
    pub profile_service: Arc<dyn ProfileService>,
    pub login_service: Arc<dyn LoginService>,
    pub user_repo: Arc<dyn UserRepo>,
    pool: Option<Pool<MySql>>,
}

impl Host {
    pub async fn try_new(settings: &Settings) -> anyhow::Result<Self> {
        let credential_hasher: Arc<dyn CredentialHasher> =
            Arc::new(Argon2PasswordHasher::new(HashConfig::from(&settings.hash))?);

        match settings.store.backend.as_str() {
            "memory" => {
                let store = Arc::new(MemoryStore::new());
                match settings.store.seed_path.as_deref() {
                    Some(path) => {
                        let users = Seed::from_file(path)
                            .await?
                            .load_into(&store, credential_hasher.clone())
                            .await?;
                        info!(path, users, "memory store seeded");
                    }
                    None => warn!("memory store has no seed_path, starting empty"),
                }
                Self::wire(settings, Self::memory_storage(store), credential_hasher, None)
            }
            "mysql" => {
                let dsn = settings
                    .store
                    .mysql_dsn
                    .as_ref()
                    .ok_or_else(|| anyhow::anyhow!("store.mysql_dsn is required for mysql"))?;
                let pool = Pool::<MySql>::connect(dsn.expose_secret()).await?;
                let storage = Storage {
                    user_repo: Arc::new(MySqlUserRepo::new(pool.clone())),
                    owner_repo: Arc::new(MySqlOwnerRepo::new()),
                    auth_repo: Arc::new(MySqlAuthRepo::new(pool.clone())),
                    tx_manager: Arc::new(MySqlTxManager::new(pool.clone())),
                };
                Self::wire(settings, storage, credential_hasher, Some(pool))
            }
            other => Err(anyhow::anyhow!("Unknown store backend: {}", other)),
        }
    }

    /// Builds a host over an existing in-memory store.
    pub fn with_memory_store(settings: &Settings, store: Arc<MemoryStore>) -> anyhow::Result<Self> {
        let credential_hasher: Arc<dyn CredentialHasher> =
            Arc::new(Argon2PasswordHasher::new(HashConfig::from(&settings.hash))?);
        Self::wire(settings, Self::memory_storage(store), credential_hasher, None)
    }

    fn memory_storage(store: Arc<MemoryStore>) -> Storage {
        Storage {
            user_repo: Arc::new(MemoryUserRepo::new(store.clone())),
            owner_repo: Arc::new(MemoryOwnerRepo::new()),
            auth_repo: Arc::new(MemoryAuthRepo::new(store.clone())),
            tx_manager: Arc::new(MemoryTxManager::new(store)),
        }
    }

    fn wire(
        settings: &Settings,
        storage: Storage,
        credential_hasher: Arc<dyn CredentialHasher>,
        pool: Option<Pool<MySql>>,
    ) -> anyhow::Result<Self> {
        let profile_resolver: Arc<dyn ProfileUpdateResolver> =
            Arc::new(DefaultProfileUpdateResolver::new(credential_hasher.clone()));
        let login_resolver: Arc<dyn LoginCredentialResolver> = Arc::new(
            DefaultLoginCredentialResolver::new(settings.login.failure_message.clone())?,
        );

        let authenticator: Arc<dyn Authenticator> =
            Arc::new(RepoAuthenticator::new(storage.auth_repo, credential_hasher));

        let profile_service: Arc<dyn ProfileService> = Arc::new(RealProfileService::new(
            storage.user_repo.clone(),
            storage.owner_repo,
            profile_resolver,
            storage.tx_manager,
        ));
        let login_service: Arc<dyn LoginService> =
            Arc::new(RealLoginService::new(login_resolver, authenticator));

        info!(backend = %settings.store.backend, "host ready");

        Ok(Self {
            profile_service,
            login_service,
            user_repo: storage.user_repo,
            pool,
        })
    }

    pub async fn shutdown(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
        info!("host shut down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_model::Principal;
    use crate::settings::{Hash, Log, Login, Store};
    use secrecy::SecretString;

    const SEED: &str = r#"{
  "users": [
    {
      "user_id": "3c6e0b8a-9f1d-4a2b-8c7d-5e4f3a2b1c0d",
      "name": "Ada",
      "email": "ada@example.com",
      "username": "ada",
      "password": "analytical",
      "owner": {
        "owner_id": "7d8e9f0a-1b2c-4d3e-8f4a-5b6c7d8e9f0a",
        "name": "Ada",
        "email": "ada@example.com"
      }
    }
  ]
}"#;

    fn settings(seed_path: Option<String>) -> Settings {
        Settings {
            hash: Hash {
                memory_kib: 8,
                iterations: 1,
                parallelism: 1,
            },
            log: Log {
                filter: "info".to_string(),
            },
            login: Login::default(),
            store: Store {
                backend: "memory".to_string(),
                mysql_dsn: None,
                seed_path,
            },
        }
    }

    fn login(identifier: &str, password: &str) -> LoginInput {
        LoginInput {
            identifier: identifier.to_string(),
            password: SecretString::from(password),
        }
    }

    #[tokio::test]
    async fn memory_backend_serves_seeded_users() {
        let path = std::env::temp_dir().join(format!("panel-auth-seed-{}.json", uuid::Uuid::new_v4()));
        tokio::fs::write(&path, SEED).await.unwrap();

        let host = Host::try_new(&settings(Some(path.to_string_lossy().into_owned())))
            .await
            .unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        let user_id = host.login_service.login(login("ada", "analytical")).await.unwrap();
        assert_eq!(
            host.login_service
                .login(login("ada@example.com", "analytical"))
                .await
                .unwrap(),
            user_id
        );

        let user = host.user_repo.get(user_id).await.unwrap().unwrap();
        let update = host
            .profile_service
            .save(
                &Principal::Record(user),
                ProfileUpdateRequest {
                    name: Some("Ada L.".to_string()),
                    password: Some(SecretString::from("engine")),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(update.owner.unwrap().name, "Ada L.");

        assert!(host.login_service.login(login("ada", "analytical")).await.is_err());
        assert_eq!(host.login_service.login(login("ada", "engine")).await.unwrap(), user_id);
    }

    #[tokio::test]
    async fn memory_backend_without_seed_starts_empty() {
        let host = Host::try_new(&settings(None)).await.unwrap();
        assert!(matches!(
            host.login_service.login(login("ada", "analytical")).await,
            Err(LoginError::CredentialRejected(_))
        ));
    }

    #[tokio::test]
    async fn missing_seed_file_fails_startup() {
        assert!(Host::try_new(&settings(Some("does/not/exist.json".to_string()))).await.is_err());
    }
}
