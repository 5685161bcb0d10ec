//! Command-line and environment configuration.
//!
//! Flags fall back to environment variables; binaries load a `.env` file
//! with `dotenvy` before parsing so both sources are visible to clap.

use clap::{Args, Parser, ValueEnum};
use std::net::SocketAddr;
use thiserror::Error;

/// Default listen address of the RPC server.
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Default base URL the terminal client connects to.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";

/// Default number of pooled `PostgreSQL` connections.
pub const DEFAULT_POOL_SIZE: u32 = 8;

/// Storage backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreBackend {
    /// `PostgreSQL` through Diesel.
    Postgres,
    /// Process-local store, lost on shutdown.
    Memory,
}

/// Command-line arguments of the RPC server.
#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server", about = "Serves the todo RPC procedures", version)]
pub struct ServerArgs {
    /// Socket address to listen on.
    #[arg(long, env = "TODO_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// Storage backend.
    #[arg(long, env = "TODO_STORE", value_enum, default_value_t = StoreBackend::Postgres)]
    pub store: StoreBackend,

    /// `PostgreSQL` connection URL, required by the postgres store.
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum number of pooled database connections.
    #[arg(long, env = "TODO_POOL_SIZE", default_value_t = DEFAULT_POOL_SIZE)]
    pub pool_size: u32,
}

impl ServerArgs {
    /// Builds the validated store configuration from the parsed flags.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the selected backend is missing required
    /// settings.
    pub fn store_config(&self) -> Result<StoreConfig, ConfigError> {
        StoreConfig::from_parts(self.store, self.database_url.clone(), self.pool_size)
    }
}

/// Connection settings of the terminal client.
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct ClientArgs {
    /// Base URL of the todo RPC server.
    #[arg(long, env = "TODO_SERVER", default_value = DEFAULT_SERVER_URL, global = true)]
    pub server: String,
}

/// Validated store settings.
#[derive(Clone, PartialEq, Eq)]
pub enum StoreConfig {
    /// In-memory store.
    Memory,
    /// `PostgreSQL` store.
    Postgres {
        /// Connection URL.
        database_url: String,
        /// Maximum number of pooled connections, at least 1.
        pool_size: u32,
    },
}

impl StoreConfig {
    /// Validates raw settings for `backend`.
    ///
    /// A blank URL counts as missing. The pool size is ignored by the
    /// in-memory backend.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDatabaseUrl`] or
    /// [`ConfigError::InvalidPoolSize`] for an incomplete postgres setup.
    pub fn from_parts(
        backend: StoreBackend,
        database_url: Option<String>,
        pool_size: u32,
    ) -> Result<Self, ConfigError> {
        match backend {
            StoreBackend::Memory => Ok(Self::Memory),
            StoreBackend::Postgres => {
                let url = database_url
                    .filter(|candidate| !candidate.trim().is_empty())
                    .ok_or(ConfigError::MissingDatabaseUrl)?;
                if pool_size == 0 {
                    return Err(ConfigError::InvalidPoolSize);
                }
                Ok(Self::Postgres {
                    database_url: url,
                    pool_size,
                })
            }
        }
    }

    /// Returns the backend these settings select.
    #[must_use]
    pub const fn backend(&self) -> StoreBackend {
        match self {
            Self::Memory => StoreBackend::Memory,
            Self::Postgres { .. } => StoreBackend::Postgres,
        }
    }
}

// Connection URLs may carry credentials, so they never reach log output.
impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Memory => f.write_str("Memory"),
            Self::Postgres { pool_size, .. } => f
                .debug_struct("Postgres")
                .field("database_url", &"<redacted>")
                .field("pool_size", pool_size)
                .finish(),
        }
    }
}

/// Errors raised while validating configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The postgres store was selected without a connection URL.
    #[error("the postgres store requires --database-url or DATABASE_URL")]
    MissingDatabaseUrl,

    /// The pool size is zero.
    #[error("pool size must be at least 1")]
    InvalidPoolSize,
}
