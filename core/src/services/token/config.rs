//! Configuration for the token service

use jsonwebtoken::Algorithm;
use sb_shared::config::JwtConfig;

use crate::domain::entities::token::{JWT_ISSUER, TOKEN_EXPIRY_DAYS};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm (HMAC family)
    pub algorithm: Algorithm,
    /// Token lifetime in days
    pub expiry_days: i64,
    /// Issuer written into and required from every token
    pub issuer: String,
}

impl TokenServiceConfig {
    /// Create a configuration with the given secret and default lifetime
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: secret.into(),
            ..Default::default()
        }
    }
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: sb_shared::config::auth::DEVELOPMENT_JWT_SECRET.to_string(),
            algorithm: Algorithm::HS256,
            expiry_days: TOKEN_EXPIRY_DAYS,
            issuer: JWT_ISSUER.to_string(),
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        let algorithm = match config.algorithm.as_str() {
            "HS384" => Algorithm::HS384,
            "HS512" => Algorithm::HS512,
            _ => Algorithm::HS256,
        };

        Self {
            jwt_secret: config.secret.clone(),
            algorithm,
            expiry_days: config.expiry_days,
            issuer: config.issuer.clone(),
        }
    }
}
