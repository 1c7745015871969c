//! # Infrastructure Layer
//!
//! Concrete implementations of the repository and storage traits declared in
//! `sb_core`:
//!
//! - **Database**: MySQL repositories using SQLx, with embedded migrations
//! - **Storage**: local-disk image store for post illustrations
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

use sb_core::errors::DomainError;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Storage module - uploaded image files
pub mod storage;

#[cfg(feature = "mysql")]
pub use database::{
    DatabasePool, MySqlCommentRepository, MySqlPostRepository, MySqlUserRepository,
    PoolStatistics,
};
pub use storage::LocalImageStore;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failed
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Filesystem error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        DomainError::internal(err.to_string())
    }
}
