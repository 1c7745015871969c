//! Authentication service module
//!
//! This module provides username/password authentication:
//! - Registration with bcrypt-hashed passwords
//! - Login with a single failure outcome for unknown users and bad passwords
//! - Identity lookup that re-issues a fresh token

mod config;
mod password;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use password::{PasswordHasher, MAX_PASSWORD_BYTES, PASSWORD_TOO_LONG};
pub use service::{AuthService, AuthSession};
