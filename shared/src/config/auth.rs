//! Authentication configuration: token signing and password hashing

use serde::{Deserialize, Serialize};

/// Secret used when `JWT_SECRET` is not provided. Refused in production.
pub const DEVELOPMENT_JWT_SECRET: &str = "development-secret-please-change-in-production";

/// Default token lifetime in days
pub const DEFAULT_TOKEN_EXPIRY_DAYS: i64 = 30;

/// Longest accepted token lifetime in days
pub const MAX_TOKEN_EXPIRY_DAYS: i64 = 3650;

/// Default bcrypt cost factor
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret key for signing tokens
    pub secret: String,

    /// Token lifetime in days
    pub expiry_days: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// Algorithm for JWT signing (default: HS256)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEVELOPMENT_JWT_SECRET),
            expiry_days: DEFAULT_TOKEN_EXPIRY_DAYS,
            issuer: String::from("scribe"),
            algorithm: default_algorithm(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set token expiry in days
    pub fn with_expiry_days(mut self, days: i64) -> Self {
        self.expiry_days = days;
        self
    }

    /// Check if using the built-in development secret
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEVELOPMENT_JWT_SECRET
    }
}

/// Password hashing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PasswordConfig {
    /// bcrypt cost factor (4..=31)
    pub bcrypt_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Password hashing configuration
    #[serde(default)]
    pub password: PasswordConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET")
            .unwrap_or_else(|_| DEVELOPMENT_JWT_SECRET.to_string());
        let expiry_days = std::env::var("JWT_EXPIRY_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TOKEN_EXPIRY_DAYS);
        let bcrypt_cost = std::env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_BCRYPT_COST);

        Self {
            jwt: JwtConfig {
                secret,
                expiry_days,
                ..Default::default()
            },
            password: PasswordConfig { bcrypt_cost },
        }
    }

    /// Get JWT secret
    pub fn jwt_secret(&self) -> &str {
        &self.jwt.secret
    }
}

fn default_algorithm() -> String {
    String::from("HS256")
}
