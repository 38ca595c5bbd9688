use crate::application_impl::{DEFAULT_FAILURE_MESSAGE, HashConfig};
use anyhow::{Result, anyhow};
use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use secrecy::SecretString;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub hash: Hash,
    pub log: Log,
    #[serde(default)]
    pub login: Login,
    pub store: Store,
}

#[derive(Debug, Deserialize)]
pub struct Hash {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for Hash {
    fn default() -> Self {
        let config = HashConfig::default();
        Self {
            memory_kib: config.memory_kib,
            iterations: config.iterations,
            parallelism: config.parallelism,
        }
    }
}

impl From<&Hash> for HashConfig {
    fn from(hash: &Hash) -> Self {
        HashConfig {
            memory_kib: hash.memory_kib,
            iterations: hash.iterations,
            parallelism: hash.parallelism,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Log {
    pub filter: String,
}

#[derive(Debug, Deserialize)]
pub struct Login {
    pub failure_message: String,
}

impl Default for Login {
    fn default() -> Self {
        Self {
            failure_message: DEFAULT_FAILURE_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Store {
    pub backend: String, // "mysql", or "memory" seeded from `seed_path`
    pub mysql_dsn: Option<SecretString>,
    pub seed_path: Option<String>,
}

#[cfg(debug_assertions)]
const SETTINGS_PATH: &str = "settings/dev.toml";
#[cfg(not(debug_assertions))]
const SETTINGS_PATH: &str = "settings/release.toml";

/// Loads settings from `path` (or the build's default file), then lets
/// `PANEL_AUTH__SECTION__KEY` environment variables override single keys.
pub fn parse_settings(path: Option<&str>) -> Result<Settings> {
    let path = path.unwrap_or(SETTINGS_PATH);
    build(Config::builder().add_source(File::with_name(path)))
}

fn build(builder: ConfigBuilder<DefaultState>) -> Result<Settings> {
    let settings: Settings = builder
        .add_source(Environment::with_prefix("PANEL_AUTH").separator("__"))
        .build()
        .map_err(|e| anyhow!(e))?
        .try_deserialize()
        .map_err(|e| anyhow!(e))?;

    Ok(settings)
}
