//! Configuration for the authentication service

use sb_shared::config::PasswordConfig;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// bcrypt cost factor used for new password hashes
    pub bcrypt_cost: u32,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl AuthServiceConfig {
    pub fn with_bcrypt_cost(bcrypt_cost: u32) -> Self {
        Self { bcrypt_cost }
    }
}

impl From<&PasswordConfig> for AuthServiceConfig {
    fn from(config: &PasswordConfig) -> Self {
        Self {
            bcrypt_cost: config.bcrypt_cost,
        }
    }
}
