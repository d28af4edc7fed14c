// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AuditStoreConfig {
    database_url: String,
    max_connections: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

const DEFAULT_MAX_CONNECTIONS: u32 = 16;

impl AuditStoreConfig {
    /// Build configuration from environment variables. Uses sensible
    /// defaults for optional values and validates required keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let max_connections = match env::var("AUDIT_DB_MAX_CONNECTIONS") {
            Ok(raw) => raw.parse::<u32>().map_err(|_| {
                ConfigError::Invalid("AUDIT_DB_MAX_CONNECTIONS must be a positive integer".into())
            })?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };
        if max_connections == 0 {
            return Err(ConfigError::Invalid(
                "AUDIT_DB_MAX_CONNECTIONS must be at least 1".into(),
            ));
        }

        Ok(Self {
            database_url,
            max_connections,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn max_connections(&self) -> u32 {
        self.max_connections
    }
}
