//! Database configuration loaded from the process environment.
//!
//! Reads the `POSTGRES_*` variables shared with the deployment's database
//! secret, plus `ENV` naming the deployment environment.

use crate::board::adapters::postgres::BoardPgPool;
use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use figment::{Figment, providers::Env};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading configuration or opening the pool.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable is missing or malformed.
    #[error("failed to load config: {0}")]
    Load(#[from] Box<figment::Error>),

    /// The connection pool could not be built.
    #[error("failed to build database pool: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Load(Box::new(err))
    }
}

/// `PostgreSQL` connection settings.
#[derive(Debug, Deserialize)]
pub struct DatabaseConfig {
    /// Server host name.
    pub postgres_host: String,
    /// Server port.
    pub postgres_port: u16,
    /// Login role.
    pub postgres_user: String,
    /// Login password.
    pub postgres_password: Secret<String>,
    /// Database name.
    pub postgres_database_name: String,
    /// Deployment environment name.
    #[serde(default = "default_env")]
    pub env: String,
    /// Upper bound on pooled connections.
    #[serde(default = "default_max_connections")]
    pub postgres_max_connections: u32,
}

fn default_env() -> String {
    "local".to_owned()
}

const fn default_max_connections() -> u32 {
    10
}

impl DatabaseConfig {
    /// Loads the configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] when a required variable is missing or
    /// cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_figment(&Figment::from(Env::raw().only(&[
            "POSTGRES_HOST",
            "POSTGRES_PORT",
            "POSTGRES_USER",
            "POSTGRES_PASSWORD",
            "POSTGRES_DATABASE_NAME",
            "POSTGRES_MAX_CONNECTIONS",
            "ENV",
        ])))
    }

    /// Extracts the configuration from an existing figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] when extraction fails.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        Ok(figment.extract()?)
    }

    /// Returns `true` when running outside a deployed environment.
    #[must_use]
    pub fn is_local(&self) -> bool {
        self.env == "local"
    }

    /// Renders the connection URL, including the password.
    #[must_use]
    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.postgres_user,
            self.postgres_password.expose_secret(),
            self.postgres_host,
            self.postgres_port,
            self.postgres_database_name,
        )
    }

    /// Builds the connection pool used by the `PostgreSQL` board store.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Pool`] when the pool cannot be created.
    pub fn build_pool(&self) -> Result<BoardPgPool, ConfigError> {
        let manager = ConnectionManager::<PgConnection>::new(self.database_url());
        let pool = Pool::builder()
            .max_size(self.postgres_max_connections)
            .build(manager)?;
        tracing::info!(
            host = %self.postgres_host,
            database = %self.postgres_database_name,
            env = %self.env,
            "database pool ready"
        );
        Ok(pool)
    }
}
