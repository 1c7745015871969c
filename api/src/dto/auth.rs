use sb_core::services::auth::{MAX_PASSWORD_BYTES, PASSWORD_TOO_LONG};
use sb_shared::types::AuthCredentials;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Body of `POST /api/auth/register`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Login key, unique and case-sensitive
    #[validate(length(min = 1, max = 255, message = "Username must be 1 to 255 characters"))]
    pub username: String,

    /// Measured in bytes, the unit bcrypt truncates in
    #[validate(
        length(min = 1, message = "Password is required"),
        custom(function = "validate_password_bytes")
    )]
    pub password: String,
}

fn validate_password_bytes(password: &str) -> Result<(), ValidationError> {
    if password.len() > MAX_PASSWORD_BYTES {
        let mut error = ValidationError::new("password_too_long");
        error.message = Some(PASSWORD_TOO_LONG.into());
        return Err(error);
    }
    Ok(())
}

/// Body of `POST /api/auth/login`
///
/// Not validated beyond deserialization: every mismatch, empty fields
/// included, ends up as the same invalid credentials answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl From<RegisterRequest> for AuthCredentials {
    fn from(request: RegisterRequest) -> Self {
        AuthCredentials::new(request.username, request.password)
    }
}

impl From<LoginRequest> for AuthCredentials {
    fn from(request: LoginRequest) -> Self {
        AuthCredentials::new(request.username, request.password)
    }
}
