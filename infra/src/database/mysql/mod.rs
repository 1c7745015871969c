//! MySQL-specific database implementations
//!
//! This module contains MySQL implementations of repository traits
//! using SQLx for database operations. Ids are stored as `CHAR(36)`.

pub mod comment_repository_impl;
pub mod post_repository_impl;
pub mod user_repository_impl;

// Re-export the MySQL implementations
pub use comment_repository_impl::MySqlCommentRepository;
pub use post_repository_impl::MySqlPostRepository;
pub use user_repository_impl::MySqlUserRepository;

use sb_core::errors::DomainError;
use uuid::Uuid;

/// Wrap a SQLx failure as an internal domain error, logging the cause
pub(crate) fn query_failed(operation: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| {
        tracing::error!("{} failed: {}", operation, e);
        DomainError::internal(format!("{} failed: {}", operation, e))
    }
}

/// Parse a `CHAR(36)` id column
pub(crate) fn parse_id(value: &str, column: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(value)
        .map_err(|e| DomainError::internal(format!("Invalid UUID in {}: {}", column, e)))
}

/// Read a column, mapping a decode failure to an internal error
pub(crate) fn column<'r, T>(row: &'r sqlx::mysql::MySqlRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>,
{
    use sqlx::Row;
    row.try_get(name)
        .map_err(|e| DomainError::internal(format!("Failed to get {}: {}", name, e)))
}
