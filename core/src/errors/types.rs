//! Error types for authentication and token handling
//!
//! The display strings of these errors are internal. User-visible messages are
//! chosen by the presentation layer so that, for example, every token failure
//! surfaces with the same wording.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No bearer token was presented
    #[error("Missing bearer token")]
    MissingToken,

    /// The username is already taken; raised by the credential store itself
    #[error("Username already taken")]
    DuplicateUsername,

    /// Unknown username or wrong password; the two cases are deliberately merged
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The token verified but the referenced user no longer exists
    #[error("Token subject no longer exists")]
    StaleIdentity,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Not decodable as a token, or claims are unusable
    #[error("Malformed token")]
    Malformed,

    /// Not produced with the current signing secret
    #[error("Invalid signature")]
    InvalidSignature,

    /// Signature valid but past the embedded expiry
    #[error("Token expired")]
    Expired,

    #[error("Token generation failed")]
    GenerationFailed,
}
