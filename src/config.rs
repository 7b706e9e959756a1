//! Startup configuration
//!
//! Read once from the environment and the two key files, then shared
//! immutably for the life of the process.

use serde::Deserialize;
use std::{env, fs, net::SocketAddr, path::Path};
use thiserror::Error;
use url::Url;

use crate::services::access_token::TokenSet;

const DEFAULT_DATABASE_KEYS_PATH: &str = "./keys/database.json";
const DEFAULT_TOKEN_KEYS_PATH: &str = "./keys/token.json";
const DEFAULT_DATABASE_USER: &str = "postgres";
const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 3000);
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_RUN_MIGRATIONS: bool = false;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("Invalid value for {key}: {value}")]
    InvalidVar { key: String, value: String },
    #[error("Invalid database host in keys file: {0}")]
    InvalidDatabaseKeys(String),
}

/// `keys/database.json`
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseKeysFile {
    #[serde(rename = "PostgreSQL")]
    pub postgres: DatabaseKeys,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseKeys {
    pub database: String,
    pub entry_point: String,
    pub port: PortValue,
    pub password: String,
}

/// Port is stored either as a number or as a string in the keys file
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PortValue {
    Number(u16),
    Text(String),
}

impl std::fmt::Display for PortValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PortValue::Number(port) => write!(f, "{}", port),
            PortValue::Text(port) => write!(f, "{}", port.trim()),
        }
    }
}

impl DatabaseKeys {
    pub fn connection_url(&self, user: &str) -> Result<String, ConfigError> {
        let invalid = || ConfigError::InvalidDatabaseKeys(self.entry_point.clone());

        let mut url = Url::parse(&format!("postgres://{}:{}", self.entry_point, self.port))
            .map_err(|_| invalid())?;
        url.set_username(user).map_err(|_| invalid())?;
        url.set_password(Some(&self.password)).map_err(|_| invalid())?;
        url.set_path(&self.database);

        Ok(url.to_string())
    }
}

/// `keys/token.json`
#[derive(Debug, Clone, Deserialize)]
pub struct TokenKeysFile {
    pub tokens: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub run_migrations: bool,
    pub bind_addr: SocketAddr,
    pub tokens: TokenSet,
}

impl AppConfig {
    /// Load configuration. `DATABASE_URL` takes precedence over the
    /// credentials file when set. Migrations only run with
    /// `RUN_MIGRATIONS=true`; the table normally belongs to the ingestion job.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = match env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                let path = var_or("DATABASE_KEYS_PATH", DEFAULT_DATABASE_KEYS_PATH);
                let user = var_or("DATABASE_USER", DEFAULT_DATABASE_USER);
                load_database_keys(&path)?.connection_url(&user)?
            }
        };

        let tokens_path = var_or("TOKEN_KEYS_PATH", DEFAULT_TOKEN_KEYS_PATH);
        let tokens = load_tokens(&tokens_path)?;

        Ok(Self {
            database_url,
            max_connections: parse_var("DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            run_migrations: parse_var("RUN_MIGRATIONS", DEFAULT_RUN_MIGRATIONS)?,
            bind_addr: parse_var("BIND_ADDR", SocketAddr::from(DEFAULT_BIND_ADDR))?,
            tokens,
        })
    }
}

pub fn load_database_keys(path: impl AsRef<Path>) -> Result<DatabaseKeys, ConfigError> {
    let file: DatabaseKeysFile = read_json(path.as_ref())?;
    Ok(file.postgres)
}

pub fn load_tokens(path: impl AsRef<Path>) -> Result<TokenSet, ConfigError> {
    let file: TokenKeysFile = read_json(path.as_ref())?;
    tracing::info!("Loaded {} API tokens", file.tokens.len());
    Ok(TokenSet::new(file.tokens))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        tracing::debug!("{} not set, using default: {}", key, default);
        default.to_string()
    })
}

fn parse_var<T: std::str::FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::InvalidVar {
            key: key.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}
