//! Shared utilities and common types for the Scribe server and client
//!
//! This crate provides common functionality used across all modules:
//! - Configuration types loaded from the environment
//! - Error response structures
//! - Wire types exchanged between the API and its clients

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, ConfigError, DatabaseConfig, Environment, JwtConfig, PasswordConfig,
    ServerConfig, StorageConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{
    AuthCredentials, AuthorSummary, CommentView, CreateCommentRequest, DeletePostResponse,
    HealthResponse, LoginResponse, MeResponse, PostView, PostsOverview, RegisterResponse,
    UserProfile,
};
