//! Configuration module with business-specific sub-modules
//!
//! - `auth` - Token signing and password hashing
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection
//! - `server` - HTTP server and CORS origins
//! - `storage` - Local image storage

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;
pub mod storage;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig, PasswordConfig};
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use server::ServerConfig;
pub use storage::StorageConfig;

/// Configuration errors detected at startup
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set in production")]
    DefaultSecretInProduction,

    #[error("JWT_SECRET must not be empty")]
    EmptySecret,

    #[error("JWT_EXPIRY_DAYS must be between 1 and 3650, got {0}")]
    InvalidExpiry(i64),

    #[error("BCRYPT_COST must be between 4 and 31, got {0}")]
    InvalidBcryptCost(u32),
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration; `None` selects in-memory storage
    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Image storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load every section from environment variables
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            storage: StorageConfig::from_env(),
        }
    }

    /// Check the loaded values before the server starts
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.jwt.secret.is_empty() {
            return Err(ConfigError::EmptySecret);
        }
        if self.environment.is_production() && self.auth.jwt.is_using_default_secret() {
            return Err(ConfigError::DefaultSecretInProduction);
        }
        if !(1..=auth::MAX_TOKEN_EXPIRY_DAYS).contains(&self.auth.jwt.expiry_days) {
            return Err(ConfigError::InvalidExpiry(self.auth.jwt.expiry_days));
        }
        let cost = self.auth.password.bcrypt_cost;
        if !(4..=31).contains(&cost) {
            return Err(ConfigError::InvalidBcryptCost(cost));
        }
        Ok(())
    }
}
